use super::participant::Participant;

/// Instructive template the system prompt editor starts with
pub const DEFAULT_SYSTEM_PROMPT: &str = "あなたは議事録作成のプロフェッショナルです。
会議で議論された主要なトピックと決定事項を要約し、誰が読んでも会議の内容が理解できる議事録を作成できます。

# 制約条件
・文字起こしデータは AI によるもので、一部の書き起こしミスが含まれています。文脈を理解し、内容を整理してください。
・基本情報（日時、場所、出席者など）を最初に記載してください。
・主要な決定事項を冒頭でまとめてください。
・次にアクションアイテムをまとめてください。
・各議題ごとに見出しを設け、発言者の名前（さん付け）と内容を記録してください。
・見出しや箇条書きで検索しやすく構造化してください。
・専門用語は初回に定義、ケバ取り、簡潔明瞭に記述してください。
・議事録部分のみを出力してください。
";

/// Everything that goes into one generation call; never stored
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub system_prompt: &'a str,
    pub participants: &'a [Participant],
    pub transcript: &'a str,
}

impl<'a> GenerationRequest<'a> {
    pub fn new(system_prompt: &'a str, participants: &'a [Participant], transcript: &'a str) -> Self {
        Self {
            system_prompt,
            participants,
            transcript,
        }
    }

    /// Serialize into the single prompt string sent to the model
    ///
    /// Layout: system prompt section, participants section (one line each),
    /// transcript header, then the raw transcript.
    pub fn compose(&self) -> String {
        let participants_text = self
            .participants
            .iter()
            .map(Participant::prompt_line)
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "## システムプロンプト: \n{}\n\n## 参加者: \n{}\n\n文字起こしテキスト:\n\n{}",
            self.system_prompt, participants_text, self.transcript
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_orders_sections() {
        let participants = vec![Participant::new("A", "PM", "")];
        let prompt = GenerationRequest::new("S", &participants, "T").compose();

        let s = prompt.find("S").unwrap();
        let p = prompt.find("- A：役割 PM、備考 ").unwrap();
        let t = prompt.rfind("T").unwrap();
        assert!(s < p && p < t);
        assert!(prompt.ends_with("\n\nT"));
    }

    #[test]
    fn test_compose_exact_layout() {
        let participants = vec![
            Participant::new("田中", "書記", ""),
            Participant::new("佐藤", "PM", "遅れて参加"),
        ];
        let prompt = GenerationRequest::new("要約して", &participants, "本文").compose();

        assert_eq!(
            prompt,
            "## システムプロンプト: \n要約して\n\n## 参加者: \n\
             - 田中：役割 書記、備考 \n\
             - 佐藤：役割 PM、備考 遅れて参加\n\n\
             文字起こしテキスト:\n\n本文"
        );
    }

    #[test]
    fn test_compose_without_participants() {
        let prompt = GenerationRequest::new("S", &[], "T").compose();
        assert_eq!(prompt, "## システムプロンプト: \nS\n\n## 参加者: \n\n\n文字起こしテキスト:\n\nT");
    }
}
