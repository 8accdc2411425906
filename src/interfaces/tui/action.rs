//! Action 系统
//!
//! 后台请求完成后，通过 channel 把结果作为 Action 送回事件循环

use crate::client::{ShortenResult, UrlRecord};
use crate::errors::Result;

/// 事件循环处理的异步结果
#[derive(Debug, Clone)]
pub enum Action {
    /// 缩短请求完成
    ShortenFinished(Result<ShortenResult>),
    /// 列表请求完成
    LinksFetched(Result<Vec<UrlRecord>>),
}
