use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::params::GenParams;

/// Build a short identifier for the output filename.
///
/// Hashes the parameter string together with a timestamp component, so two
/// runs with identical parameters at different instants still get distinct
/// filenames. This is for uniqueness only, not reproducibility.
pub fn generate_unique_id(params: &GenParams) -> String {
    let random_component = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let seed_str = match params.seed {
        Some(s) => s.to_string(),
        None => "none".to_string(),
    };
    let params_str = format!(
        "size={}_height={}_octaves={}_seed={}_water={}_{}",
        params.size,
        params.height_factor,
        params.octaves,
        seed_str,
        params.water_level,
        random_component,
    );

    let digest = Sha256::digest(params_str.as_bytes());
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_twelve_hex_chars() {
        let id = generate_unique_id(&GenParams::default());
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_same_params_different_instants_differ() {
        let params = GenParams::default();
        let a = generate_unique_id(&params);
        // timestamp_nanos ticks between calls, so the digests diverge
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = generate_unique_id(&params);
        assert_ne!(a, b);
    }
}
