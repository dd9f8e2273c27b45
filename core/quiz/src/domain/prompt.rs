//! プロンプト組み立て用のテンプレートと整形
//!
//! SYSTEM_INSTRUCTION は出力形式（Callout 形式のクイズ）の契約なので文字どおりに保つ。
//! 行末の空白も含めて崩れないよう concat! で 1 行ずつ書く。

/// 1 ノートあたりにプロンプトへ入れる最大文字数
pub const NOTE_CHAR_BUDGET: usize = 1500;

/// モデルに渡すシステム指示
pub const SYSTEM_INSTRUCTION: &str = concat!(
    "\n",
    "    You are a professional Cybersecurity Certification Exam Creator.\n",
    "    \n",
    "    INSTRUCTIONS:\n",
    "    1. Read the <source_note> content.\n",
    "    2. Create a MULTIPLE CHOICE QUIZ (A, B, C, D).\n",
    "    3. **CRITICAL:** Use the \"Callout\" format below. Do not use HTML tags like <details>.\n",
    "\n",
    "    EXAMPLE OUTPUT FORMAT (Copy exactly):\n",
    "    \n",
    "    ### 🛡️ Question 1\n",
    "    > [!QUESTION] **What flag is used in Nmap for a UDP scan?**\n",
    "    > A) -sT\n",
    "    > B) -sU\n",
    "    > C) -sS\n",
    "    > D) -Pn\n",
    "\n",
    "    > [!SUCCESS]- 🔑 **Click to Reveal Answer**\n",
    "    > **✅ Correct Answer:** B) -sU\n",
    "    > **📝 Explanation:** The -sU flag specifically targets UDP ports.\n",
    "    > **🔗 Source:** [[Nmap Scanning.md]]\n",
    "    \n",
    "    ---\n",
    "    ",
);

/// 生成されたプロンプト（system + user）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    pub system: String,
    pub user: String,
}

/// 先頭から最大 budget 文字（char 単位）を返す
pub fn truncate_chars(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// CRLF / CR を LF にそろえる
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 1 ノート分のタグ付きブロック。改行をそろえて切り詰めてから、改行を空白にする。
pub fn source_block(title: &str, text: &str) -> String {
    let normalized = normalize_newlines(text);
    let clean = truncate_chars(&normalized, NOTE_CHAR_BUDGET).replace('\n', " ");
    format!(
        "\n<source_note title='{}'>\n{}\n</source_note>",
        title, clean
    )
}

/// ユーザーメッセージ（学習素材 + 生成指示）
pub fn user_message(context: &str) -> String {
    format!(
        "Here is the study material:\n{}\n\nGENERATE THE EXAM NOW.",
        context
    )
}

/// システム指示。weak_areas があれば末尾に追記する。
pub fn system_instruction(weak_areas: Option<&str>) -> String {
    match weak_areas {
        Some(summary) => format!(
            "{}\n    PERFORMANCE CONTEXT: {}\n",
            SYSTEM_INSTRUCTION, summary
        ),
        None => SYSTEM_INSTRUCTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_callout_format() {
        assert!(SYSTEM_INSTRUCTION.starts_with("\n    You are a professional Cybersecurity Certification Exam Creator.\n"));
        assert!(SYSTEM_INSTRUCTION.contains("    > [!QUESTION] **What flag is used in Nmap for a UDP scan?**\n"));
        assert!(SYSTEM_INSTRUCTION.contains("    > [!SUCCESS]- 🔑 **Click to Reveal Answer**\n"));
        assert!(SYSTEM_INSTRUCTION.contains("Do not use HTML tags like <details>."));
        assert!(SYSTEM_INSTRUCTION.contains("[[Nmap Scanning.md]]"));
        // 空行にもインデントの空白が残っている
        assert!(SYSTEM_INSTRUCTION.contains("Exam Creator.\n    \n    INSTRUCTIONS:"));
        assert!(SYSTEM_INSTRUCTION.ends_with("    ---\n    "));
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_truncation_to_budget() {
        let long = "x".repeat(NOTE_CHAR_BUDGET + 200);
        assert_eq!(truncate_chars(&long, NOTE_CHAR_BUDGET).chars().count(), NOTE_CHAR_BUDGET);
    }

    #[test]
    fn test_source_block_collapses_newlines_after_truncation() {
        let block = source_block("TCP.md", "line one\nline two");
        assert_eq!(
            block,
            "\n<source_note title='TCP.md'>\nline one line two\n</source_note>"
        );
    }

    #[test]
    fn test_source_block_truncates_long_note() {
        let text = format!("{}\n{}", "a".repeat(1000), "b".repeat(1000));
        let block = source_block("long.md", &text);
        let body = block
            .trim_start_matches("\n<source_note title='long.md'>\n")
            .trim_end_matches("\n</source_note>");
        assert_eq!(body.chars().count(), NOTE_CHAR_BUDGET);
        assert!(!body.contains('\n'));
        assert_eq!(body.matches('b').count(), 499);
    }

    #[test]
    fn test_source_block_collapses_crlf_and_cr() {
        let block = source_block("win.md", "line one\r\nline two\rline three");
        assert_eq!(
            block,
            "\n<source_note title='win.md'>\nline one line two line three\n</source_note>"
        );
    }

    #[test]
    fn test_crlf_does_not_count_against_budget() {
        // CRLF 区切りでも LF と同じ文字数で切り詰める
        let lines: Vec<String> = (0..400).map(|_| "abc".to_string()).collect();
        let lf = source_block("a.md", &lines.join("\n"));
        let crlf = source_block("a.md", &lines.join("\r\n"));
        assert_eq!(lf, crlf);
        assert!(!crlf.contains('\r'));
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            user_message("CTX"),
            "Here is the study material:\nCTX\n\nGENERATE THE EXAM NOW."
        );
    }

    #[test]
    fn test_system_instruction_with_and_without_weak_areas() {
        assert_eq!(system_instruction(None), SYSTEM_INSTRUCTION);
        let with = system_instruction(Some("User performance has been clean recently."));
        assert!(with.starts_with(SYSTEM_INSTRUCTION));
        assert!(with.ends_with("PERFORMANCE CONTEXT: User performance has been clean recently.\n"));
    }
}
