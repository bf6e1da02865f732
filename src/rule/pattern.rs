//! 信号匹配模式
//! 文本匹配器与针对HTTP响应的判定条件

use once_cell::unsync::OnceCell;
use regex::Regex;

use crate::probe::ProbeResponse;

#[derive(Debug, Clone)]
pub enum Matcher {
    Contains(String), // 包含匹配（区分大小写）
    ContainsAny(Vec<String>), // 任一关键字包含匹配（忽略大小写，关键字存小写）
    Regex(Regex), // 正则匹配（作用于小写文本）
}

impl Matcher {
    /// 忽略大小写的关键字匹配
    pub fn any_of(keywords: &[&str]) -> Self {
        Matcher::ContainsAny(keywords.iter().map(|k| k.to_lowercase()).collect())
    }

    /// 简单匹配判断
    pub fn is_match(&self, input: &MatchInput<'_>) -> bool {
        match self {
            Matcher::Contains(s) => input.raw().contains(s.as_str()),
            Matcher::ContainsAny(keywords) => {
                let lowered = input.lowered();
                keywords.iter().any(|k| lowered.contains(k.as_str()))
            }
            Matcher::Regex(regex) => regex.is_match(input.lowered()),
        }
    }
}

/// 待匹配文本，小写形式按需计算且只计算一次
pub struct MatchInput<'a> {
    raw: &'a str,
    lowered: OnceCell<String>,
}

impl<'a> MatchInput<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &str {
        self.raw
    }

    pub fn lowered(&self) -> &str {
        self.lowered.get_or_init(|| self.raw.to_lowercase())
    }
}

/// 针对单个响应的判定条件
#[derive(Debug, Clone)]
pub enum Condition {
    /// 状态码为200
    StatusOk,
    /// 存在指定Header（名称小写）
    HeaderPresent(String),
    /// 指定Header的值满足匹配器（不存在视为不匹配）
    Header(String, Matcher),
    /// 响应体满足匹配器
    Body(Matcher),
    /// 全部条件同时满足
    All(Vec<Condition>),
}

impl Condition {
    pub fn header_present(name: &str) -> Self {
        Condition::HeaderPresent(name.to_lowercase())
    }

    pub fn header(name: &str, matcher: Matcher) -> Self {
        Condition::Header(name.to_lowercase(), matcher)
    }

    pub fn is_match(&self, response: &ProbeResponse, body: &MatchInput<'_>) -> bool {
        match self {
            Condition::StatusOk => response.is_ok(),
            Condition::HeaderPresent(name) => response.headers.contains_key(name),
            Condition::Header(name, matcher) => response
                .header(name)
                .map(|value| matcher.is_match(&MatchInput::new(value)))
                .unwrap_or(false),
            Condition::Body(matcher) => matcher.is_match(body),
            Condition::All(conditions) => conditions.iter().all(|c| c.is_match(response, body)),
        }
    }
}
