//! Localized failure messages.

use crate::error::Failure;
use serde::{Deserialize, Serialize};

/// Message language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// Simplified Chinese, the catalog the rule grammar shipped with.
    #[default]
    ZhCn,
    En,
}

/// Renders [`Failure`]s in one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn render(&self, failure: &Failure) -> String {
        match self.locale {
            Locale::ZhCn => zh_cn(failure),
            Locale::En => en(failure),
        }
    }
}

fn zh_cn(failure: &Failure) -> String {
    match failure {
        Failure::Required => "不能为空".to_string(),
        Failure::Price => "必须为两位小数的价格".to_string(),
        Failure::NotInteger => "必须为整数".to_string(),
        Failure::NotNumber => "必须为数值类型".to_string(),
        Failure::TooSmall(bound) => format!("必须大于{bound}"),
        Failure::TooLarge(bound) => format!("必须小于{bound}"),
        Failure::Date => "格式错误".to_string(),
        Failure::TooShort(bound) => format!("字符数必须大于{bound}"),
        Failure::TooLong(bound) => format!("字符数必须小于{bound}"),
        Failure::Phone => "手机号码不正确".to_string(),
        Failure::Email => "电子邮件格式不正确".to_string(),
        Failure::Age => "年龄取值范围在0 ~ 140岁之间".to_string(),
        Failure::Chinese => "必须为中文汉字".to_string(),
        Failure::English => "必须为英文字母".to_string(),
    }
}

fn en(failure: &Failure) -> String {
    match failure {
        Failure::Required => "must not be empty".to_string(),
        Failure::Price => "must be a price with two decimal places".to_string(),
        Failure::NotInteger => "must be an integer".to_string(),
        Failure::NotNumber => "must be numeric".to_string(),
        Failure::TooSmall(bound) => format!("must be greater than {bound}"),
        Failure::TooLarge(bound) => format!("must be less than {bound}"),
        Failure::Date => "invalid date format".to_string(),
        Failure::TooShort(bound) => format!("must be longer than {bound} characters"),
        Failure::TooLong(bound) => format!("must be shorter than {bound} characters"),
        Failure::Phone => "invalid mobile number".to_string(),
        Failure::Email => "invalid email address".to_string(),
        Failure::Age => "age must be between 0 and 140".to_string(),
        Failure::Chinese => "must be Chinese characters".to_string(),
        Failure::English => "must be English letters".to_string(),
    }
}
