use crate::utils::error::{Result, SkillGapError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 若字串是 http/https URL 則回傳解析結果，否則視為本地路徑
pub fn as_http_url(location: &str) -> Option<Url> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        _ => None,
    }
}

/// 資料來源可以是 http(s) URL 或本地路徑
pub fn validate_source_location(field_name: &str, location: &str) -> Result<()> {
    if location.trim().is_empty() {
        return Err(SkillGapError::MissingSourceError {
            field: field_name.to_string(),
        });
    }

    if as_http_url(location).is_some() {
        return Ok(());
    }

    // 其他 scheme（ftp:// 之類）不支援
    if let Ok(url) = Url::parse(location) {
        // Windows 磁碟代號 (C:\...) 也會被解析成單字母 scheme
        if url.scheme().len() > 1 {
            return Err(SkillGapError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: location.to_string(),
                reason: format!("Unsupported URL scheme: {}", url.scheme()),
            });
        }
    }

    validate_path(field_name, location)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SkillGapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SkillGapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SkillGapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SkillGapError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_unique_keys<'a, I>(field_name: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(SkillGapError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: key.to_string(),
                reason: "Duplicate section key".to_string(),
            });
        }
    }
    Ok(())
}
