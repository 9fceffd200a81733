//! # Comic Picker
//!
//! 最新番号 N から、投稿するコミック番号を [1, N] の範囲で選ぶ

use rand::Rng;

/// コミック番号の選択戦略
pub trait ComicPicker: Send + Sync {
    /// [1, latest] の範囲から番号を選ぶ
    ///
    /// `latest` が 0 の場合（コミックが存在しない）は `None`
    fn pick(&self, latest: u32) -> Option<u32>;
}

/// 一様乱数で選ぶ
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ComicPicker for RandomPicker {
    fn pick(&self, latest: u32) -> Option<u32> {
        if latest == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(1..=latest))
    }
}

/// 常に同じ番号を選ぶ（特定のコミックを投稿し直す場合など）
///
/// 範囲外の番号は `latest` に丸める
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub u32);

impl ComicPicker for FixedPicker {
    fn pick(&self, latest: u32) -> Option<u32> {
        if latest == 0 {
            return None;
        }
        Some(self.0.clamp(1, latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_in_range() {
        let picker = RandomPicker;
        for latest in [1u32, 2, 3, 10, 2500] {
            for _ in 0..200 {
                let num = picker.pick(latest).unwrap();
                assert!((1..=latest).contains(&num), "{} not in [1, {}]", num, latest);
            }
        }
    }

    #[test]
    fn test_random_picker_single_comic() {
        assert_eq!(RandomPicker.pick(1), Some(1));
    }

    #[test]
    fn test_random_picker_no_comics() {
        assert_eq!(RandomPicker.pick(0), None);
    }

    #[test]
    fn test_fixed_picker() {
        assert_eq!(FixedPicker(3).pick(5), Some(3));
        assert_eq!(FixedPicker(9).pick(5), Some(5));
        assert_eq!(FixedPicker(0).pick(5), Some(1));
        assert_eq!(FixedPicker(3).pick(0), None);
    }
}
