//! 可见性过滤
//! 按当前页面URL筛选应显示的便签（或其他持有URL模式的对象）

use tracing::debug;

use super::url_matcher::match_any_url_pattern;
use crate::rule::UrlPattern;
use crate::utils::{preview, PREVIEW_MAX_CHARS};

/// 持有URL模式的对象
pub trait HasUrlPatterns {
    fn url_patterns(&self) -> &[UrlPattern];
}

impl HasUrlPatterns for [UrlPattern] {
    fn url_patterns(&self) -> &[UrlPattern] {
        self
    }
}

impl HasUrlPatterns for Vec<UrlPattern> {
    fn url_patterns(&self) -> &[UrlPattern] {
        self
    }
}

/// 对象是否应在该URL上显示
pub fn is_visible<T: HasUrlPatterns + ?Sized>(url: &str, item: &T) -> bool {
    match_any_url_pattern(url, item.url_patterns())
}

/// 筛选在该URL上显示的对象（保持原始顺序）
pub fn filter_visible<'a, T: HasUrlPatterns>(url: &str, items: &'a [T]) -> Vec<&'a T> {
    let visible: Vec<&T> = items.iter().filter(|item| is_visible(url, *item)).collect();
    debug!(
        "可见性过滤：url={}，可见{}/{}",
        preview(url, PREVIEW_MAX_CHARS),
        visible.len(),
        items.len()
    );
    visible
}
