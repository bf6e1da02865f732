//! 内置指纹规则库
//! 规则顺序即识别优先级：Next.js → Dify → React。
//! Dify 前端基于 Next.js 构建，带有 Next.js 特征的 Dify 实例会被识别为 Next.js。
//! 新增框架时需要在此说明其优先级依据。

use regex::Regex;

use super::model::{Framework, FrameworkRule, ProbeStep};
use super::pattern::{Condition, Matcher};
use crate::error::RwsResult;

/// Next.js 静态资源路径
pub const NEXT_PATHS: [&str; 3] = ["/_next/", "/_next/static/", "/_next/static/chunks/"];
/// Dify 特征路径
pub const DIFY_PATHS: [&str; 3] = ["/v1/ping", "/console/", "/signin"];
/// React (CRA) 构建产物路径
pub const REACT_PATHS: [&str; 3] = ["/static/js/main.js", "/asset-manifest.json", "/manifest.json"];

/// React 打包产物文件名
const REACT_CHUNK_PATTERN: &str = r"main\.[a-z0-9]+\.js|[a-z0-9]+\.chunk\.js";

/// 规则库：按优先级排列的框架规则
#[derive(Debug, Clone)]
pub struct RuleLibrary {
    pub rules: Vec<FrameworkRule>,
}

impl RuleLibrary {
    pub fn new(rules: Vec<FrameworkRule>) -> Self {
        Self { rules }
    }

    /// 内置规则库
    pub fn builtin() -> RwsResult<Self> {
        Ok(Self::new(vec![nextjs_rule(), dify_rule(), react_rule()?]))
    }

    pub fn get(&self, framework: Framework) -> Option<&FrameworkRule> {
        self.rules.iter().find(|rule| rule.framework == framework)
    }

    pub fn frameworks(&self) -> Vec<Framework> {
        self.rules.iter().map(|rule| rule.framework).collect()
    }
}

fn nextjs_rule() -> FrameworkRule {
    let root = ProbeStep::new("/")
        .check(
            Condition::header("x-powered-by", Matcher::any_of(&["next.js"])),
            "Header: x-powered-by: next.js",
        )
        .check(Condition::header_present("x-nextjs-cache"), "Header: x-nextjs-cache");

    let asset = Condition::All(vec![
        Condition::StatusOk,
        Condition::Body(Matcher::Contains("_next".to_string())),
    ]);

    FrameworkRule::new(Framework::NextJs)
        .step(root)
        .steps(ProbeStep::for_paths(&NEXT_PATHS, &asset, "Path: {path}"))
}

fn dify_rule() -> FrameworkRule {
    let root = ProbeStep::new("/")
        .check(Condition::header_present("x-dify-version"), "Header: x-dify-version")
        .check(
            Condition::header("x-powered-by", Matcher::any_of(&["dify"])),
            "Header: x-powered-by",
        )
        .check(
            Condition::Body(Matcher::any_of(&["dify", "ai application platform"])),
            "HTMLKeyword: Dify",
        );

    let endpoint = Condition::All(vec![
        Condition::StatusOk,
        Condition::Body(Matcher::any_of(&["dify", "version"])),
    ]);

    FrameworkRule::new(Framework::Dify)
        .step(root)
        .steps(ProbeStep::for_paths(&DIFY_PATHS, &endpoint, "Path: {path}"))
}

fn react_rule() -> RwsResult<FrameworkRule> {
    let root = ProbeStep::new("/")
        .check(
            Condition::Body(Matcher::any_of(&["react", "react-dom", "create-react-app"])),
            "HTMLKeyword: react",
        )
        .check(
            Condition::Body(Matcher::Regex(Regex::new(REACT_CHUNK_PATTERN)?)),
            "JSChunk: main.*.js / chunk.js",
        );

    Ok(FrameworkRule::new(Framework::React)
        .steps(ProbeStep::for_paths(&REACT_PATHS, &Condition::StatusOk, "Path: {path}"))
        .step(root))
}
