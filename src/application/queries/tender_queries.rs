//! Tender Queries

/// 分页列出招标记录查询
///
/// 不变式: offset = (page-1) * limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTenders {
    /// 页码，从 1 开始
    pub page: u32,
    /// 每页条数
    pub limit: u32,
    /// 只保留未截止的记录
    pub open_only: bool,
}

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 1000;

impl Default for ListTenders {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            open_only: false,
        }
    }
}

impl ListTenders {
    /// 从原始查询字符串参数构建
    ///
    /// 宽松解析：无法解析或非正数的值回落到默认；
    /// open_only 只有字面量 "true" 为真，其余一律为假
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, open_only: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
            open_only: matches!(open_only, Some("true")),
        }
    }

    /// 窗口起点
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
}
