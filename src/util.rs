//! General utility module housing formatting functions.
use pretty_bytes::converter::convert;

use std::fmt::Display;
use std::time::{Duration, Instant};

/// Converts a byte count to a `String` representation.
pub fn convert_bytes(bytes: u64) -> String {
    convert(bytes as f64).replacen(' ', "", 1)
}

/// Converts the time since an `Instant` to a readable `String`.
///
/// Sub-second precision is dropped, as it's only noise in summaries.
pub fn convert_elapsed(start: Instant) -> String {
    let elapsed = Duration::from_secs(start.elapsed().as_secs());
    humantime::format_duration(elapsed).to_string()
}

/// Logs a label/value pair using a common format.
pub fn log_pair<T>(label: &str, val: T)
where
    T: Display,
{
    info!("{}={}", label, val);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    #[test]
    fn converting_bytes_to_string() {
        let bval = 512_u64;
        let kval = bval * 512_u64;
        let mval = kval * 512_u64;
        let gval = mval * 512_u64;

        let bstr = super::convert_bytes(bval);
        let kstr = super::convert_bytes(kval);
        let mstr = super::convert_bytes(mval);
        let gstr = super::convert_bytes(gval);

        assert_eq!(bstr, "512B");
        assert_eq!(kstr, "262.14kB");
        assert_eq!(mstr, "134.22MB");
        assert_eq!(gstr, "68.72GB");
    }

    #[test]
    fn converting_elapsed_to_string() {
        assert_eq!(super::convert_elapsed(Instant::now()), "0s");
    }
}
