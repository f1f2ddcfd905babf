/// Mask a license key for logging, keeping only its last four characters.
///
/// Keys of eight characters or fewer are masked entirely.
pub fn redact_license_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
