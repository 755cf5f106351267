//! Argument resolution for both command-line dialects.
//!
//! Two grammars produce the same kind of artifact, a validated parameter
//! set for the batch converter, but their rules genuinely differ: the
//! switch dialect treats everything past the two file paths as optional
//! with per-field defaults, while the legacy positional dialect has a
//! mandatory trailing count and no per-field switches. They are kept as
//! separate functions rather than one merged control flow.
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::AppError;
use super::help;
use crate::core::params::{ConversionParams, LegacyParams};
use crate::diag::Reporter;
use crate::io::is_readable_file;
use crate::types::Dialect;

/// Resolves the switch-style argument list: two mandatory file paths
/// followed by `/m` `/f` `/c` `/g` value switches and `/r` `/b` toggles.
///
/// Fatal conditions are reported to `reporter`, followed by the usage
/// block, and returned as the matching [`AppError`]. Malformed switch
/// values are reported as warnings and fall back to documented defaults.
pub fn resolve_flag_args<W: Write>(
    args: &[String],
    reporter: &mut Reporter<W>,
) -> Result<ConversionParams, AppError> {
    let (input_shape, track_section) = required_files(args, Dialect::Flag, reporter)?;

    let mut params = ConversionParams::new(input_shape, track_section);

    for arg in &args[2..] {
        // The two-character prefix is matched literally; whatever follows
        // the third character is the raw switch value.
        match arg.get(..2) {
            Some("/r") => params.skip_roads = false,
            Some("/b") => params.set_bounding_box = false,
            Some("/m") => params.mask = mask_value(arg, reporter),
            Some("/f") => params.ffedit_location = ffedit_value(arg, reporter),
            Some("/c") => params.count = count_value(arg, reporter),
            Some("/g") => params.gauge = gauge_value(arg, reporter),
            _ => {
                let err = AppError::UnknownArgument { arg: arg.clone() };
                fail(&err, Dialect::Flag, reporter);
                return Err(err);
            }
        }
    }

    reporter.info("Arguments are correct. Starting conversion");
    Ok(params)
}

/// Resolves the legacy fixed-position argument list: two mandatory file
/// paths, an optional mask, and a mandatory strictly-positive shape count
/// in the last position.
pub fn resolve_positional_args<W: Write>(
    args: &[String],
    reporter: &mut Reporter<W>,
) -> Result<LegacyParams, AppError> {
    let (input_shape, track_section) = required_files(args, Dialect::Positional, reporter)?;

    // The count is the final mandatory argument; the mask slot only exists
    // when four or more arguments are given. Anything past the count is
    // ignored.
    let (mask, raw_count) = match args.len() {
        2 => (String::new(), None),
        3 => (String::new(), Some(args[2].as_str())),
        _ => (args[2].clone(), Some(args[3].as_str())),
    };

    let Some(count) = raw_count.and_then(parse_positive) else {
        let err = AppError::InvalidShapeCount {
            value: raw_count.unwrap_or_default().to_string(),
        };
        fail(&err, Dialect::Positional, reporter);
        return Err(err);
    };

    reporter.info("Arguments are correct. Starting conversion");
    Ok(LegacyParams {
        input_shape,
        track_section,
        mask,
        count,
    })
}

/// Checks the two mandatory file paths shared by both dialects. Argument
/// lists shorter than two never touch the file system.
fn required_files<W: Write>(
    args: &[String],
    dialect: Dialect,
    reporter: &mut Reporter<W>,
) -> Result<(PathBuf, PathBuf), AppError> {
    if args.len() < 2 {
        let err = AppError::MissingArguments;
        fail(&err, dialect, reporter);
        return Err(err);
    }

    if !is_readable_file(Path::new(&args[0])) {
        let err = AppError::UnreadableShapeFile;
        fail(&err, dialect, reporter);
        return Err(err);
    }

    if !is_readable_file(Path::new(&args[1])) {
        let err = AppError::UnreadableTrackSection;
        fail(&err, dialect, reporter);
        return Err(err);
    }

    Ok((PathBuf::from(&args[0]), PathBuf::from(&args[1])))
}

/// Every fatal error is reported and immediately followed by the usage
/// block for the dialect that rejected the arguments.
fn fail<W: Write>(err: &AppError, dialect: Dialect, reporter: &mut Reporter<W>) {
    reporter.error(&err.to_string());
    help::print_usage(dialect, reporter);
}

/// Raw payload of a value switch: everything from the fourth character on
/// (`/c:20` yields `20`). The separator character itself is never
/// interpreted. `None` when the payload is missing or the cut would land
/// inside a multi-byte character.
fn switch_value(arg: &str) -> Option<&str> {
    if arg.len() > 3 { arg.get(3..) } else { None }
}

fn mask_value<W: Write>(arg: &str, reporter: &mut Reporter<W>) -> String {
    match switch_value(arg) {
        Some(value) => strip_quotes(value).to_string(),
        None => {
            reporter.warning("incorrect mask value. No filename mask applied");
            String::new()
        }
    }
}

/// The ffedit payload must be long enough to name anything (total argument
/// length above 5) and must point at an existing file once quotes are
/// stripped; otherwise compression is skipped.
fn ffedit_value<W: Write>(arg: &str, reporter: &mut Reporter<W>) -> Option<PathBuf> {
    if arg.len() > 5 {
        if let Some(value) = switch_value(arg) {
            let path = Path::new(strip_quotes(value));
            if path.is_file() {
                return Some(path.to_path_buf());
            }
        }
    }

    reporter.warning("incorrect ffedit location value");
    None
}

/// Fallback is 1, not the "unlimited" 0 used when the switch is absent:
/// a mistyped limit must not silently produce an unlimited run.
fn count_value<W: Write>(arg: &str, reporter: &mut Reporter<W>) -> u32 {
    if let Some(count) = switch_value(arg).and_then(|v| v.parse::<u32>().ok()) {
        return count;
    }

    reporter.warning("incorrect shape count value");
    1
}

/// `str::parse` is locale-independent (decimal point only), which keeps
/// gauge parsing reproducible across host locales.
fn gauge_value<W: Write>(arg: &str, reporter: &mut Reporter<W>) -> f32 {
    if let Some(gauge) = switch_value(arg).and_then(|v| v.parse::<f32>().ok()) {
        if gauge >= 0.0 {
            return gauge;
        }
    }

    reporter.warning("incorrect gauge value, converting all shapes");
    0.0
}

/// Strips exactly one layer of surrounding double quotes; anything else is
/// returned unchanged. No escape processing.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(count) if count > 0 => Some(count),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn fixtures() -> (NamedTempFile, NamedTempFile) {
        (NamedTempFile::new().unwrap(), NamedTempFile::new().unwrap())
    }

    fn args_with(shape: &NamedTempFile, tsection: &NamedTempFile, extra: &[&str]) -> Vec<String> {
        let mut args = vec![
            shape.path().to_string_lossy().into_owned(),
            tsection.path().to_string_lossy().into_owned(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        args
    }

    fn capture() -> Reporter<Vec<u8>> {
        Reporter::new(Vec::new())
    }

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn flag_rejects_short_argument_lists() {
        let mut reporter = capture();
        let err = resolve_flag_args(&["only-one.csv".to_string()], &mut reporter).unwrap_err();

        assert_eq!(err, AppError::MissingArguments);
        let out = output(reporter);
        assert!(out.contains("ERROR: At least two arguments should be specified"));
        assert!(out.contains("Usage:"));
    }

    #[test]
    fn flag_rejects_unreadable_shape_file() {
        let (_, tsection) = fixtures();
        let args = vec![
            "no/such/shape.csv".to_string(),
            tsection.path().to_string_lossy().into_owned(),
        ];

        let mut reporter = capture();
        let err = resolve_flag_args(&args, &mut reporter).unwrap_err();

        assert_eq!(err, AppError::UnreadableShapeFile);
        assert!(output(reporter).contains("ERROR: Could not open initial shape file"));
    }

    #[test]
    fn flag_rejects_unreadable_tsection() {
        let (shape, _) = fixtures();
        let args = vec![
            shape.path().to_string_lossy().into_owned(),
            "no/such/tsection.dat".to_string(),
        ];

        let mut reporter = capture();
        let err = resolve_flag_args(&args, &mut reporter).unwrap_err();

        assert_eq!(err, AppError::UnreadableTrackSection);
        assert!(output(reporter).contains("ERROR: Could not open tsection.dat file"));
    }

    #[test]
    fn flag_defaults_without_switches() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params = resolve_flag_args(&args_with(&shape, &tsection, &[]), &mut reporter).unwrap();

        assert_eq!(params.mask, "");
        assert_eq!(params.ffedit_location, None);
        assert_eq!(params.count, 0);
        assert_eq!(params.gauge, 0.0);
        assert!(params.skip_roads);
        assert!(params.set_bounding_box);

        let out = output(reporter);
        assert!(out.contains("Arguments are correct. Starting conversion"));
        assert!(!out.contains("WARNING"));
    }

    #[test]
    fn flag_parses_count_switch() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/c:20"]), &mut reporter).unwrap();

        assert_eq!(params.count, 20);
        assert!(!output(reporter).contains("WARNING"));
    }

    #[test]
    fn flag_empty_count_falls_back_to_one() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/c:"]), &mut reporter).unwrap();

        assert_eq!(params.count, 1);
        assert!(output(reporter).contains("WARNING: incorrect shape count value"));
    }

    #[test]
    fn flag_negative_count_falls_back_to_one() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/c:-5"]), &mut reporter).unwrap();

        assert_eq!(params.count, 1);
        assert!(output(reporter).contains("WARNING: incorrect shape count value"));
    }

    #[test]
    fn flag_parses_gauge_switch() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/g:1.5"]), &mut reporter).unwrap();

        assert_eq!(params.gauge, 1.5);
        assert!(!output(reporter).contains("WARNING"));
    }

    #[test]
    fn flag_bad_gauge_falls_back_to_all_gauges() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/g:abc"]), &mut reporter).unwrap();

        assert_eq!(params.gauge, 0.0);
        assert!(output(reporter).contains("WARNING: incorrect gauge value, converting all shapes"));
    }

    #[test]
    fn flag_rejects_unknown_switch() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let err = resolve_flag_args(&args_with(&shape, &tsection, &["/c:5", "/q:7"]), &mut reporter)
            .unwrap_err();

        assert_eq!(
            err,
            AppError::UnknownArgument {
                arg: "/q:7".to_string()
            }
        );
        assert!(output(reporter).contains("ERROR: Unknown argument provided"));
    }

    #[test]
    fn flag_rejects_single_character_argument() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let err = resolve_flag_args(&args_with(&shape, &tsection, &["x"]), &mut reporter)
            .unwrap_err();

        assert_eq!(err, AppError::UnknownArgument { arg: "x".to_string() });
    }

    #[test]
    fn flag_toggles_flip_their_defaults() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params = resolve_flag_args(&args_with(&shape, &tsection, &["/r", "/b"]), &mut reporter)
            .unwrap();

        assert!(!params.skip_roads);
        assert!(!params.set_bounding_box);
    }

    #[test]
    fn flag_strips_mask_quotes() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/m:\"A?t*.s\""]), &mut reporter)
                .unwrap();

        assert_eq!(params.mask, "A?t*.s");
    }

    #[test]
    fn flag_empty_mask_warns_and_matches_all() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &["/m:"]), &mut reporter).unwrap();

        assert_eq!(params.mask, "");
        assert!(output(reporter).contains("WARNING: incorrect mask value. No filename mask applied"));
    }

    #[test]
    fn flag_accepts_existing_ffedit_location() {
        let (shape, tsection) = fixtures();
        let ffedit = NamedTempFile::new().unwrap();
        let switch = format!("/f:{}", ffedit.path().display());

        let mut reporter = capture();
        let params =
            resolve_flag_args(&args_with(&shape, &tsection, &[&switch]), &mut reporter).unwrap();

        assert_eq!(params.ffedit_location, Some(ffedit.path().to_path_buf()));
        assert!(!output(reporter).contains("WARNING"));
    }

    #[test]
    fn flag_missing_ffedit_skips_compression() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params = resolve_flag_args(
            &args_with(&shape, &tsection, &["/f:no/such/ffeditc_unicode.exe"]),
            &mut reporter,
        )
        .unwrap();

        assert_eq!(params.ffedit_location, None);
        assert!(output(reporter).contains("WARNING: incorrect ffedit location value"));
    }

    #[test]
    fn flag_warnings_do_not_abort_resolution() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params = resolve_flag_args(
            &args_with(&shape, &tsection, &["/c:lots", "/g:wide", "/r"]),
            &mut reporter,
        )
        .unwrap();

        assert_eq!(params.count, 1);
        assert_eq!(params.gauge, 0.0);
        assert!(!params.skip_roads);

        let out = output(reporter);
        assert!(out.contains("WARNING: incorrect shape count value"));
        assert!(out.contains("WARNING: incorrect gauge value, converting all shapes"));
        assert!(out.contains("Arguments are correct. Starting conversion"));
    }

    #[test]
    fn flag_resolution_is_idempotent() {
        let (shape, tsection) = fixtures();
        let args = args_with(&shape, &tsection, &["/m:A*", "/c:3", "/b"]);

        let first = resolve_flag_args(&args, &mut capture()).unwrap();
        let second = resolve_flag_args(&args, &mut capture()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn positional_accepts_mask_and_count() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_positional_args(&args_with(&shape, &tsection, &["A?t*.s", "12"]), &mut reporter)
                .unwrap();

        assert_eq!(params.mask, "A?t*.s");
        assert_eq!(params.count, 12);
        assert!(output(reporter).contains("Arguments are correct. Starting conversion"));
    }

    #[test]
    fn positional_count_alone_leaves_mask_empty() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params =
            resolve_positional_args(&args_with(&shape, &tsection, &["7"]), &mut reporter).unwrap();

        assert_eq!(params.mask, "");
        assert_eq!(params.count, 7);
    }

    #[test]
    fn positional_rejects_non_positive_counts() {
        let (shape, tsection) = fixtures();

        for bad in ["0", "-5", "many"] {
            let mut reporter = capture();
            let err = resolve_positional_args(
                &args_with(&shape, &tsection, &["mask", bad]),
                &mut reporter,
            )
            .unwrap_err();

            assert_eq!(
                err,
                AppError::InvalidShapeCount {
                    value: bad.to_string()
                }
            );
            assert!(output(reporter).contains("ERROR: Shape quantity is not a positive integer"));
        }
    }

    #[test]
    fn positional_rejects_missing_count() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let err =
            resolve_positional_args(&args_with(&shape, &tsection, &[]), &mut reporter).unwrap_err();

        assert_eq!(
            err,
            AppError::InvalidShapeCount {
                value: String::new()
            }
        );
        assert!(output(reporter).contains("ERROR: Shape quantity is not a positive integer"));
    }

    #[test]
    fn positional_mask_is_taken_verbatim() {
        let (shape, tsection) = fixtures();
        let mut reporter = capture();
        let params = resolve_positional_args(
            &args_with(&shape, &tsection, &["\"A?t*.s\"", "3"]),
            &mut reporter,
        )
        .unwrap();

        // No quote stripping in this dialect.
        assert_eq!(params.mask, "\"A?t*.s\"");
    }

    #[test]
    fn strip_quotes_removes_one_surrounding_pair() {
        assert_eq!(strip_quotes("\"A?t*.s\""), "A?t*.s");
        assert_eq!(strip_quotes("\"\"nested\"\""), "\"nested\"");
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\"unterminated"), "\"unterminated");
        assert_eq!(strip_quotes("\""), "\"");
    }
}
