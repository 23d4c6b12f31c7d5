//! Zero-padding of episode numbers and other numeric strings.

use super::error::UtilsError;

/// Width used by [`pad`]; episode numbers on the listing site never exceed three digits.
pub const DEFAULT_PAD_WIDTH: usize = 3;

/// Largest width accepted by [`pad_to`].
pub const MAX_PAD_WIDTH: usize = 64;

/// Left-pads `num` with `0` to three characters.
///
/// Returns `InvalidArgument` for an empty string. Strings already three or more
/// characters long are returned unchanged. Digits are not validated.
pub fn pad(num: &str) -> Result<String, UtilsError> {
    pad_to(num, DEFAULT_PAD_WIDTH)
}

/// Left-pads `num` with `0` to `width` characters.
///
/// Returns `InvalidArgument` for an empty string or a width above [`MAX_PAD_WIDTH`].
pub fn pad_to(num: &str, width: usize) -> Result<String, UtilsError> {
    if num.is_empty() {
        return Err(UtilsError::invalid_argument("num can't be a blank string"));
    }
    if width > MAX_PAD_WIDTH {
        return Err(UtilsError::invalid_argument(format!(
            "width {} exceeds the maximum of {}",
            width, MAX_PAD_WIDTH
        )));
    }

    let len = num.chars().count();
    if len >= width {
        return Ok(num.to_string());
    }

    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat('0').take(width - len));
    out.push_str(num);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_rejected() {
        let err = pad("").unwrap_err();
        assert_eq!(err.to_string(), "num can't be a blank string");
        assert!(matches!(err, UtilsError::InvalidArgument { .. }));
    }

    #[test]
    fn pads_short_numbers() {
        assert_eq!(pad("1").unwrap(), "001");
        assert_eq!(pad("11").unwrap(), "011");
    }

    #[test]
    fn leaves_long_numbers() {
        assert_eq!(pad("111").unwrap(), "111");
        assert_eq!(pad("1111").unwrap(), "1111");
    }

    #[test]
    fn length_based_not_numeric() {
        assert_eq!(pad("ab").unwrap(), "0ab");
        assert_eq!(pad("007").unwrap(), "007");
    }

    #[test]
    fn custom_width() {
        assert_eq!(pad_to("7", 5).unwrap(), "00007");
        assert_eq!(pad_to("7", 0).unwrap(), "7");
        assert!(pad_to("", 5).is_err());
    }

    #[test]
    fn oversized_width_is_rejected() {
        assert_eq!(pad_to("7", MAX_PAD_WIDTH).unwrap().len(), MAX_PAD_WIDTH);
        let err = pad_to("7", usize::MAX).unwrap_err();
        assert!(matches!(err, UtilsError::InvalidArgument { .. }));
        assert!(err.to_string().contains("exceeds the maximum of 64"));
        assert!(pad_to("7", MAX_PAD_WIDTH + 1).is_err());
    }
}
