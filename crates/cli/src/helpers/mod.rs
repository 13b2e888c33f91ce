// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

pub mod telemetry;

/// Renders match offsets as `[1, 6, 11]`.
pub fn format_offsets(offsets: &[usize]) -> String {
    let joined = offsets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::format_offsets;

    #[test]
    fn test_format_offsets() {
        assert_eq!(format_offsets(&[]), "[]");
        assert_eq!(format_offsets(&[6, 11, 24]), "[6, 11, 24]");
    }
}
