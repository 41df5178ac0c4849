//! 随机选取器 - 能力层
//!
//! 对去重后的题目序列做 Fisher–Yates 无偏洗牌，再截取前
//! min(请求数量, 序列长度) 个。随机源通过参数注入，测试里用固定种子
//! 的 `StdRng` 断言精确顺序；教学场景不需要加密级随机性。

use crate::models::Question;
use rand::Rng;

/// 洗牌后截取指定数量的题目
///
/// # 参数
/// - `questions`: 去重并分配好编号的题目序列
/// - `count`: 请求的题目数量
/// - `rng`: 注入的随机源
///
/// # 返回
/// 均匀随机排列的前 min(count, len) 个题目
pub fn select<R: Rng>(mut questions: Vec<Question>, count: usize, rng: &mut R) -> Vec<Question> {
    // Fisher–Yates：从尾部向前，每个位置与不大于它的随机位置交换
    for i in (1..questions.len()).rev() {
        let j = rng.gen_range(0..=i);
        questions.swap(i, j);
    }

    questions.truncate(count.min(questions.len()));
    questions
}
