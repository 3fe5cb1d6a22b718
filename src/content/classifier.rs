//! 内容块分类器 - 内容层
//!
//! 纯函数：原始文本 → 有序内容块序列
//!
//! 严格按物理行处理（按 '\n' 切分），不跨行合并、不前瞻；
//! 每次分类都从全文重新生成，块在两次分类之间没有同一性。
//! 只识别四种行形：标题（# / ##）、列表项（- / •）、空行分隔线，
//! 其余一律按段落原样保留（不处理嵌套列表、强调、链接等）

/// 内容块
///
/// 一个块对应一个源文本行，顺序与源行顺序一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// 一级标题（"# " 前缀）
    Heading1(String),
    /// 二级标题（"## " 前缀）
    Heading2(String),
    /// 列表项（"- " 或 "• " 前缀）
    BulletItem(String),
    /// 视觉分隔线（空行），不携带文本
    Divider,
    /// 普通段落，文本原样保留
    Paragraph(String),
}

/// 把原始文本分类为有序内容块序列
///
/// 确定性纯函数：相同输入必然产生相同序列，可重复调用无残留；
/// 空文本产生空序列
pub fn classify(raw: &str) -> Vec<ContentBlock> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('\n').map(classify_line).collect()
}

/// 单行分类
///
/// 检查顺序从最具体到最宽泛："## " 先于 "# "，
/// 前缀检查作用在原始行上，仅空行判断使用去空白后的内容
fn classify_line(line: &str) -> ContentBlock {
    if let Some(rest) = line.strip_prefix("## ") {
        return ContentBlock::Heading2(rest.to_string());
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return ContentBlock::Heading1(rest.to_string());
    }

    let trimmed = line.trim();
    if trimmed.starts_with("- ") || trimmed.starts_with("• ") {
        return ContentBlock::BulletItem(strip_bullet_marker(line).to_string());
    }
    if trimmed.is_empty() {
        return ContentBlock::Divider;
    }

    ContentBlock::Paragraph(line.to_string())
}

/// 剥掉行首的列表标记及其后的空白
///
/// 标记必须位于原始行的最开头才会被剥掉；
/// 带缩进的列表项保留原始文本
fn strip_bullet_marker(line: &str) -> &str {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(|rest| rest.trim_start())
        .unwrap_or(line)
}
