//! Header格式转换工具
//! 将响应头归一化为 小写键 → 小写值 的单值映射

use std::collections::HashMap;
use reqwest::header::HeaderMap;
use tracing::warn;

/// 单个响应允许处理的最大Header数量
const MAX_HEADER_COUNT: usize = 1000;

/// Header转换工具
pub struct HeaderConverter;

impl HeaderConverter {
    /// 将HeaderMap转换为HashMap<String, Vec<String>>（键值均转小写）
    pub fn to_hashmap(header_map: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut map = HashMap::new();

        for (iter_count, (key, value)) in header_map.iter().enumerate() {
            if iter_count >= MAX_HEADER_COUNT {
                warn!("Header数量超过{}，忽略剩余Header", MAX_HEADER_COUNT);
                break;
            }

            // 非UTF-8值按空串处理
            let key_str = key.as_str().to_lowercase();
            let value_str = value.to_str().unwrap_or("").to_lowercase();

            map.entry(key_str)
                .or_insert_with(Vec::new)
                .push(value_str);
        }

        map
    }

    /// 将HashMap<String, Vec<String>>转换为单值HashMap<String, String>
    ///
    /// 重复Header的非空值按出现顺序以 ", " 拼接；全部为空时保留空串，保证“存在性”判断不受影响。
    pub fn to_single_value(hashmap: &HashMap<String, Vec<String>>) -> HashMap<String, String> {
        let mut single_map = HashMap::new();
        for (key, values) in hashmap {
            let value = values
                .iter()
                .filter(|v| !v.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            single_map.insert(key.clone(), value);
        }
        single_map
    }

    /// 直接得到归一化的单值映射
    pub fn normalize(header_map: &HeaderMap) -> HashMap<String, String> {
        Self::to_single_value(&Self::to_hashmap(header_map))
    }
}
