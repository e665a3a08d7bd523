//! # Shared Utility Functions
//!
//! Address formatting for display:
//! - [`format_address`] - Format an address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x765de816845861e75a25fca122bb6898b8b1282a";
//! assert_eq!(format_address(address, 6, 4), "0x765d...282a");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is. EVM addresses are `0x`-prefixed hex (ASCII), so byte slicing is
/// safe.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with the default 6-character prefix (the `0x` plus
/// four hex digits) and 4-character suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x765de816845861e75a25fca122bb6898b8b1282a";
        assert_eq!(format_address(addr, 6, 4), "0x765d...282a");
        assert_eq!(format_address(addr, 10, 0), "0x765de816...");
        assert_eq!(format_address(addr, 2, 2), "0x...2a");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 6, 4), "short");
        assert_eq!(format_address("0xab", 6, 4), "0xab");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x765de816845861e75a25fca122bb6898b8b1282a";
        assert_eq!(truncate_address(addr), "0x765d...282a");
    }
}
