use serde::{Deserialize, Serialize};

/// 生成的题目统一附带的出处说明
pub const EXPLANATION_TEXT: &str = "extracted from the submitted document";

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// 选择题（带选项）
    MultipleChoice,
    /// 简答题（无选项）
    ShortAnswer,
}

impl QuestionType {
    /// 获取序列化时使用的名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::ShortAnswer => "short-answer",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 组合题的子题（字母 + 文本）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubQuestion {
    pub letter: String,
    pub text: String,
}

impl SubQuestion {
    pub fn new(letter: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            letter: letter.into(),
            text: text.into(),
        }
    }

    /// 渲染为选项格式："a) 文本"
    pub fn render(&self) -> String {
        format!("{}) {}", self.letter, self.text)
    }
}

/// 生成的题目
///
/// 一次生成调用的一次性产物：不持久化、不缓存、生成后不再修改。
/// 序列化字段名与消费端 Web 层保持 camelCase 一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// 题目编号（本批次内唯一，打乱前按提取顺序从 1 开始分配）
    pub id: u32,
    /// 题目类型
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 普通题题干（组合题时不存在）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// 组合题题干（普通题时不存在）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_question: Option<String>,
    /// 选项列表；简答题为空
    pub options: Vec<String>,
    /// 组合题的子题列表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_questions: Option<Vec<SubQuestion>>,
    /// 出处说明
    pub explanation: String,
}

impl Question {
    /// 获取用于相似度比较的题干文本
    pub fn stem(&self) -> &str {
        self.question
            .as_deref()
            .or(self.main_question.as_deref())
            .unwrap_or_default()
    }
}

/// 题目草稿：提取阶段的中间产物，去重并分配编号后转为 [`Question`]
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    /// 题干（普通题为清洗后的句子，组合题为主题干）
    pub stem: String,
    /// 已渲染的选项
    pub options: Vec<String>,
    /// 组合题的子题；普通题为 None
    pub sub_questions: Option<Vec<SubQuestion>>,
}

impl QuestionDraft {
    /// 创建简答题草稿
    pub fn short_answer(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            options: Vec::new(),
            sub_questions: None,
        }
    }

    /// 创建选择题草稿
    pub fn multiple_choice(stem: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            stem: stem.into(),
            options,
            sub_questions: None,
        }
    }

    /// 创建组合题草稿（选项由子题渲染而来）
    pub fn grouped(stem: impl Into<String>, sub_questions: Vec<SubQuestion>) -> Self {
        let options = sub_questions.iter().map(SubQuestion::render).collect();
        Self {
            stem: stem.into(),
            options,
            sub_questions: Some(sub_questions),
        }
    }

    /// 分配编号并转为最终题目
    ///
    /// 类型由选项决定：有选项即选择题，否则为简答题。
    pub fn into_question(self, id: u32) -> Question {
        let question_type = if self.options.is_empty() {
            QuestionType::ShortAnswer
        } else {
            QuestionType::MultipleChoice
        };

        let is_grouped = self.sub_questions.is_some();
        Question {
            id,
            question_type,
            question: if is_grouped { None } else { Some(self.stem.clone()) },
            main_question: if is_grouped { Some(self.stem) } else { None },
            options: self.options,
            sub_questions: self.sub_questions,
            explanation: EXPLANATION_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_follows_options() {
        let q = QuestionDraft::short_answer("光合作用的原料是什么？").into_question(1);
        assert_eq!(q.question_type, QuestionType::ShortAnswer);
        assert!(q.options.is_empty());

        let q = QuestionDraft::multiple_choice(
            "下列哪个是哺乳动物？",
            vec!["a) 鲸鱼".to_string(), "b) 鲨鱼".to_string()],
        )
        .into_question(2);
        assert_eq!(q.question_type, QuestionType::MultipleChoice);
    }

    #[test]
    fn test_flat_question_json_shape() {
        let q = QuestionDraft::multiple_choice(
            "Which planet is closest to the sun?",
            vec![
                "a) Venus".to_string(),
                "b) Mercury".to_string(),
                "c) Mars".to_string(),
                "d) Earth".to_string(),
            ],
        )
        .into_question(1);

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "multiple-choice");
        assert_eq!(json["question"], "Which planet is closest to the sun?");
        assert_eq!(json["explanation"], EXPLANATION_TEXT);
        // 普通题不应出现组合题字段
        assert!(json.get("mainQuestion").is_none());
        assert!(json.get("subQuestions").is_none());
    }

    #[test]
    fn test_grouped_question_json_shape() {
        let subs = vec![
            SubQuestion::new("a", "Apple"),
            SubQuestion::new("b", "Banana"),
        ];
        let q = QuestionDraft::grouped("Pick a fruit", subs).into_question(3);

        assert_eq!(q.options, vec!["a) Apple", "b) Banana"]);

        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["mainQuestion"], "Pick a fruit");
        assert_eq!(json["subQuestions"][0]["letter"], "a");
        assert_eq!(json["subQuestions"][1]["text"], "Banana");
        assert!(json.get("question").is_none());
    }

    #[test]
    fn test_stem_accessor() {
        let flat = QuestionDraft::short_answer("什么是牛顿第一定律？").into_question(1);
        assert_eq!(flat.stem(), "什么是牛顿第一定律？");

        let grouped =
            QuestionDraft::grouped("选出正确答案", vec![SubQuestion::new("a", "选项一")])
                .into_question(2);
        assert_eq!(grouped.stem(), "选出正确答案");
    }
}
