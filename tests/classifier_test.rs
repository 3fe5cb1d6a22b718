use write_article::content::{classify, ContentBlock};

#[test]
fn test_empty_text_produces_no_blocks() {
    // 空文本产生空序列，而不是单个分隔线
    assert_eq!(classify(""), Vec::new());
}

#[test]
fn test_heading1() {
    assert_eq!(
        classify("# Title"),
        vec![ContentBlock::Heading1("Title".to_string())]
    );
}

#[test]
fn test_heading2_with_bullets() {
    assert_eq!(
        classify("## Sub\n- item one\n- item two"),
        vec![
            ContentBlock::Heading2("Sub".to_string()),
            ContentBlock::BulletItem("item one".to_string()),
            ContentBlock::BulletItem("item two".to_string()),
        ]
    );
}

#[test]
fn test_blank_line_becomes_divider() {
    assert_eq!(
        classify("line one\n\nline two"),
        vec![
            ContentBlock::Paragraph("line one".to_string()),
            ContentBlock::Divider,
            ContentBlock::Paragraph("line two".to_string()),
        ]
    );
}

#[test]
fn test_heading2_not_misclassified_as_heading1() {
    // "## " 必须先于 "# " 检查
    assert_eq!(
        classify("## Section"),
        vec![ContentBlock::Heading2("Section".to_string())]
    );
}

#[test]
fn test_triple_hash_is_paragraph() {
    // 只识别一级和二级标题，"### " 按段落原样保留
    assert_eq!(
        classify("### deep"),
        vec![ContentBlock::Paragraph("### deep".to_string())]
    );
}

#[test]
fn test_indented_heading_marker_is_paragraph() {
    // 标题前缀检查作用在原始行上，带缩进时不算标题
    assert_eq!(
        classify("  # not a heading"),
        vec![ContentBlock::Paragraph("  # not a heading".to_string())]
    );
}

#[test]
fn test_unicode_bullet_marker() {
    assert_eq!(
        classify("• 第一项"),
        vec![ContentBlock::BulletItem("第一项".to_string())]
    );
}

#[test]
fn test_bullet_marker_without_space_is_paragraph() {
    assert_eq!(
        classify("-item"),
        vec![ContentBlock::Paragraph("-item".to_string())]
    );
}

#[test]
fn test_indented_bullet_keeps_raw_text() {
    // 标记不在行首时只识别类型，文本原样保留
    assert_eq!(
        classify("  - item"),
        vec![ContentBlock::BulletItem("  - item".to_string())]
    );
}

#[test]
fn test_bullet_strips_following_whitespace() {
    assert_eq!(
        classify("-   spaced out"),
        vec![ContentBlock::BulletItem("spaced out".to_string())]
    );
}

#[test]
fn test_whitespace_only_line_is_divider() {
    assert_eq!(classify("   \t"), vec![ContentBlock::Divider]);
}

#[test]
fn test_trailing_newline_yields_divider() {
    // 末尾换行切出一个空行
    assert_eq!(
        classify("last line\n"),
        vec![
            ContentBlock::Paragraph("last line".to_string()),
            ContentBlock::Divider,
        ]
    );
}

#[test]
fn test_paragraph_text_is_not_trimmed() {
    assert_eq!(
        classify("  padded paragraph  "),
        vec![ContentBlock::Paragraph("  padded paragraph  ".to_string())]
    );
}

#[test]
fn test_line_order_is_preserved() {
    let text = "# 标题\n\n正文第一段\n- 要点一\n• 要点二\n## 小节\n结尾";
    assert_eq!(
        classify(text),
        vec![
            ContentBlock::Heading1("标题".to_string()),
            ContentBlock::Divider,
            ContentBlock::Paragraph("正文第一段".to_string()),
            ContentBlock::BulletItem("要点一".to_string()),
            ContentBlock::BulletItem("要点二".to_string()),
            ContentBlock::Heading2("小节".to_string()),
            ContentBlock::Paragraph("结尾".to_string()),
        ]
    );
}

#[test]
fn test_classify_is_deterministic() {
    let text = "# A\n- b\n\nc";
    assert_eq!(classify(text), classify(text), "相同输入必须产生相同序列");
}
