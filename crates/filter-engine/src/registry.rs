//! 过滤器发现与合并
//!
//! 维护已知插件构造器的注册表，把原始配置映射绑定成过滤器集合：
//! 先让每个插件尝试认领每个配置项，再用默认字段目录兜底，按字段
//! 去重，保证专用实现总是优先于通用实现。

use crate::error::Result;
use crate::fields::filter_fields;
use crate::filter::Filter;
use crate::plugins::{FilterPlugin, Over18Filter};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// 原始过滤器配置：规则键 → 原始限定值，保持插入顺序
pub type FilterConfig = IndexMap<String, Value>;

/// 从 JSON 对象文本解析过滤器配置
pub fn config_from_json(json: &str) -> Result<FilterConfig> {
    Ok(serde_json::from_str(json)?)
}

/// 过滤器注册表
///
/// 插件集合在构建期固定，之后只读，跨线程共享安全。
#[derive(Clone)]
pub struct FilterRegistry {
    plugins: Vec<Arc<dyn FilterPlugin>>,
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl FilterRegistry {
    /// 创建空注册表（不含任何插件）
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// 创建包含全部内置插件的注册表
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Over18Filter));
        registry
    }

    /// 注册一个插件
    pub fn register(&mut self, plugin: Arc<dyn FilterPlugin>) {
        self.plugins.push(plugin);
    }

    /// 已注册的插件数量
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// 把配置映射绑定成过滤器集合
    ///
    /// 顺序约定：插件绑定的过滤器在前（按插件注册顺序、再按配置
    /// 项顺序），默认字段兜底的在后。同一插件可被多个配置项绑定
    /// 出多个实例（如 created_utc.min 和 created_utc.max）。
    /// 未匹配任何字段的配置项被静默丢弃；无法识别的操作符 token
    /// 是致命错误。
    #[instrument(skip(self, config), fields(entries = config.len()))]
    pub fn load(&self, config: &FilterConfig) -> Result<Vec<Filter>> {
        let mut loaded = Vec::new();
        let mut used: HashSet<String> = HashSet::new();
        let mut bound_keys: HashSet<&str> = HashSet::new();

        // 插件优先认领配置项
        for plugin in &self.plugins {
            for (key, value) in config {
                let mut filter = plugin.create();
                if filter.from_obj(key, value)? {
                    debug!(field = filter.field(), key = %key, "插件过滤器已绑定");
                    used.insert(filter.field().to_string());
                    bound_keys.insert(key.as_str());
                    loaded.push(filter);
                }
            }
        }

        // 未被插件认领的默认字段兜底
        for (field, description) in filter_fields() {
            if used.contains(*field) {
                continue;
            }
            for (key, value) in config {
                let mut filter = Filter::new(*field, *description);
                if filter.from_obj(key, value)? {
                    debug!(field = %field, key = %key, "默认字段过滤器已绑定");
                    bound_keys.insert(key.as_str());
                    loaded.push(filter);
                }
            }
        }

        for key in config.keys() {
            if !bound_keys.contains(key.as_str()) {
                debug!(key = %key, "配置项未匹配任何字段, 已忽略");
            }
        }

        info!("过滤器已加载: {} 条", loaded.len());
        Ok(loaded)
    }

    /// 列出全部可用的未绑定过滤器（用于文档/UI 展示）
    ///
    /// 每个插件一个实例，加上未被插件字段遮蔽的默认字段各一个。
    pub fn available(&self) -> Vec<Filter> {
        let mut listed: Vec<Filter> = self.plugins.iter().map(|plugin| plugin.create()).collect();
        let used: HashSet<&str> = self.plugins.iter().map(|plugin| plugin.field()).collect();

        for (field, description) in filter_fields() {
            if used.contains(*field) {
                continue;
            }
            listed.push(Filter::new(*field, *description));
        }

        listed
    }
}
