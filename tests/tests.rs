#[cfg(test)]
mod tests {
    use converter_console::config::{AppSettings, Config, Page};
    use converter_console::hooks::use_auto_refresh::refresh_delay_ms;
    use converter_console::models::{
        error::AppError,
        format::{format_bytes, format_duration, size_mib},
        upload::{FileStat, is_oversize},
        validation::{
            FieldError, StrengthTier, password_score, validate_email, validate_password_length,
            validate_password_match, validate_username,
        },
    };
    use converter_console::exports;
    use converter_console::services::api::parse_method;
    use converter_console::services::loading::DEFAULT_BUSY_LABEL;
    use converter_console::services::notify::Severity;
    use reqwest::Method;

    // ===== Username Validation =====

    #[test]
    fn test_username_accepts_matching_strings() {
        for value in ["abc", "user_name", "User123", "___", "a1_B2"] {
            assert!(validate_username(value).is_ok(), "expected pass: {value:?}");
        }
        assert!(validate_username(&"x".repeat(3)).is_ok());
        assert!(validate_username(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_username_rejects_everything_else() {
        for value in ["", "ab", "has space", "dash-ed", "dot.ted", "émile", "a@b"] {
            assert!(validate_username(value).is_err(), "expected fail: {value:?}");
        }
        assert!(validate_username(&"x".repeat(51)).is_err());
        assert_eq!(
            validate_username("ab").unwrap_err(),
            FieldError::UsernameFormat
        );
    }

    // ===== Email Validation =====

    #[test]
    fn test_email_accepts_simple_shape() {
        for value in [
            "user@example.com",
            "first.last@sub.domain.org",
            "u+tag@host.io",
        ] {
            assert!(validate_email(value).is_ok(), "expected pass: {value:?}");
        }
    }

    #[test]
    fn test_email_rejects_malformed() {
        for value in [
            "",
            "plain",
            "missing@tld",
            "@example.com",
            "user@.com",
            "user@@example.com",
            "user @example.com",
        ] {
            assert!(validate_email(value).is_err(), "expected fail: {value:?}");
        }
    }

    // ===== Password Strength =====

    #[test]
    fn test_strength_score_range() {
        assert_eq!(password_score(""), 0);
        assert_eq!(password_score("Abcdefgh1!"), 5);
        for pw in ["a", "abcdef", "Abcdef1", "Abcdefghij1!"] {
            assert!(password_score(pw) <= 5);
        }
    }

    #[test]
    fn test_strength_monotone_as_conditions_accumulate() {
        // Each step satisfies a superset of the previous step's conditions.
        let ladder = ["", "abcdef", "Abcdef", "Abcdef1", "Abcdef1!", "Abcdefgh1!"];
        let scores: Vec<u8> = ladder.iter().map(|pw| password_score(pw)).collect();
        assert!(
            scores.windows(2).all(|w| w[0] <= w[1]),
            "scores not monotone: {scores:?}"
        );
    }

    #[test]
    fn test_strength_tiers() {
        assert_eq!(
            StrengthTier::from_score(password_score("")),
            StrengthTier::None
        );
        assert_eq!(
            StrengthTier::from_score(password_score("abcdef")),
            StrengthTier::Weak
        );
        assert_eq!(
            StrengthTier::from_score(password_score("Abcde1")),
            StrengthTier::Medium
        );
        assert_eq!(
            StrengthTier::from_score(password_score("Abcdefgh1!")),
            StrengthTier::Strong
        );
    }

    // ===== Password Match =====

    #[test]
    fn test_password_match_pass_and_fail() {
        assert!(validate_password_match("abc123", "abc123").is_ok());

        let err = validate_password_match("abc123", "abc124").unwrap_err();
        assert_eq!(err, FieldError::PasswordMismatch);
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_password_length_gate() {
        assert!(validate_password_length("abc123", Config::MIN_PASSWORD_LEN).is_ok());
        assert!(validate_password_length("abc12", Config::MIN_PASSWORD_LEN).is_err());
    }

    // ===== Upload Cap =====

    #[test]
    fn test_upload_cap_boundary() {
        let cap = Config::MAX_UPLOAD_BYTES;
        assert_eq!(cap, 500 * 1024 * 1024);
        assert!(!is_oversize(cap));
        assert!(is_oversize(cap + 1));
    }

    #[test]
    fn test_file_stat_oversize_path() {
        let over = FileStat {
            name: "big.mkv".to_string(),
            size: Config::MAX_UPLOAD_BYTES + 1,
            mime: "video/x-matroska".to_string(),
        };
        assert!(over.is_oversize());

        let at_cap = FileStat {
            name: "exact.mp4".to_string(),
            size: Config::MAX_UPLOAD_BYTES,
            mime: "video/mp4".to_string(),
        };
        assert!(!at_cap.is_oversize());
        assert_eq!(at_cap.size_mib(), 500.0);
    }

    // ===== Formatting =====

    #[test]
    fn test_size_mib_two_decimals() {
        assert_eq!(size_mib(1_572_864), 1.5);
        assert_eq!(size_mib(10 * 1024 * 1024), 10.0);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(2048, 2), "2 KB");
        assert_eq!(format_bytes(1_048_576, 2), "1 MB");
    }

    #[test]
    fn test_format_duration_padding() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(3661), "01:01:01");
    }

    // ===== Auto-Refresh Decision =====

    #[test]
    fn test_no_reload_scheduled_when_idle() {
        let settings = AppSettings::default();
        assert_eq!(refresh_delay_ms(0, &settings), None);
    }

    #[test]
    fn test_reload_uses_configured_delay() {
        let settings = AppSettings::default();
        assert_eq!(refresh_delay_ms(1, &settings), Some(Config::REFRESH_DELAY_MS));

        let custom = AppSettings::builder().refresh_delay_ms(2_500).build();
        assert_eq!(refresh_delay_ms(4, &custom), Some(2_500));
    }

    // ===== Settings & Page =====

    #[test]
    fn test_settings_url_prefixing() {
        let settings = AppSettings::builder().base_path("/converter").build();
        assert_eq!(settings.url("/status"), "/converter/status");
        assert_eq!(AppSettings::default().url("/status"), "/status");
    }

    #[test]
    fn test_page_attribute_parsing() {
        assert_eq!(
            Page::from_attributes(Some("status"), Some("2")),
            Page::Status { processing: 2 }
        );
        assert_eq!(Page::from_attributes(Some("upload"), Some("2")), Page::Upload);
        assert_eq!(Page::from_attributes(None, None), Page::None);
    }

    // ===== Errors & Severity =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");

        let error = AppError::NotFound("job 17".to_string());
        assert_eq!(error.to_string(), "Not found: job 17");
    }

    // ===== Exported Namespace =====

    #[test]
    fn test_loading_state_is_exported_for_inline_scripts() {
        // The page-script namespace carries the loading-state toggle; the
        // idle label travels in the caller-owned handle.
        let _show: fn(web_sys::HtmlElement, Option<String>) -> exports::LoadingHandle =
            exports::show_loading;
        let _hide: fn(exports::LoadingHandle) = exports::hide_loading;
        assert_eq!(DEFAULT_BUSY_LABEL, "Loading...");
    }

    #[test]
    fn test_request_method_is_caller_specified() {
        assert_eq!(parse_method(None).unwrap(), Method::GET);
        assert_eq!(parse_method(Some("post")).unwrap(), Method::POST);
        assert_eq!(parse_method(Some("put")).unwrap(), Method::PUT);
        assert!(parse_method(Some("bad method")).is_err());
    }

    #[test]
    fn test_severity_css_classes() {
        assert_eq!(Severity::Info.css_class(), "toast-info");
        assert_eq!(Severity::Success.css_class(), "toast-success");
        assert_eq!(Severity::Danger.css_class(), "toast-danger");
    }
}
