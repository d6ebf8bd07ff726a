//! Seeded synthetic dataset for first run
//!
//! The gallery ships with a full mock dataset (4 grades x 6 classes x 20
//! students) so the UI has something to show before any real entries
//! exist. Generation is seed-reproducible: same seed and clock reading,
//! same dataset, including the one-time shuffle.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::model::{ClassName, ContentType, Gender, Grade, Student};

/// Students generated per (grade, class) pair
pub const STUDENTS_PER_CLASS: usize = 20;

/// How far into the past synthetic timestamps spread, in milliseconds
const TIMESTAMP_SPREAD_MS: i64 = 10_000_000;

const SURNAMES: &[&str] = &[
    "王", "陳", "李", "張", "林", "黃", "吳", "劉", "蔡", "楊", "許", "鄭", "謝", "洪", "郭",
];

const NAMES_MALE: &[&str] = &[
    "小明", "大寶", "小強", "阿傑", "凱文", "小華", "小龍", "家豪", "志明", "俊傑", "子軒",
    "承恩", "宇翔", "冠宇", "家瑋",
];

const NAMES_FEMALE: &[&str] = &[
    "小美", "小玉", "阿花", "美玲", "雅婷", "小娟", "心怡", "佳琪", "怡君", "淑芬", "子涵",
    "詠晴", "以柔", "雨萱", "思妤",
];

const DESCRIPTIONS: &[&str] = &[
    "參觀動物園的學習紀錄，認識了大象與長頸鹿。",
    "母親節卡片設計作品，使用了很溫馨的配色。",
    "第一次學會自己穿鞋子的影片紀錄！",
    "注音符號練習作業，筆畫非常工整。",
    "積木城堡搭建，展現了很棒的空間概念。",
    "唱遊課的表演，非常有活力。",
    "認識數字1-10的學習單。",
    "萬聖節裝扮照片，大家都很可愛。",
    "種植綠豆觀察日記，發現發芽了！",
    "父親節畫像，畫出了爸爸的特徵。",
    "學習分享玩具，大家都玩得很開心。",
    "戶外教學去公園撿落葉，做成了拼貼畫。",
];

fn pick<T: Copy>(rng: &mut Pcg32, pool: &[T]) -> T {
    pool[rng.random_range(0..pool.len())]
}

/// Generate the full mock dataset, shuffled once.
///
/// Ids are sequential strings during seeding (real inserts use clock-based
/// ids); timestamps scatter over the `TIMESTAMP_SPREAD_MS` window before
/// `now_ms`.
pub fn generate(seed: u64, now_ms: i64) -> Vec<Student> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut students =
        Vec::with_capacity(Grade::ALL.len() * ClassName::ALL.len() * STUDENTS_PER_CLASS);
    let mut id_counter: u32 = 1;

    for grade in Grade::ALL {
        for class_name in ClassName::ALL {
            for _ in 0..STUDENTS_PER_CLASS {
                let gender = if rng.random_bool(0.5) {
                    Gender::Boy
                } else {
                    Gender::Girl
                };
                let given = match gender {
                    Gender::Boy => pick(&mut rng, NAMES_MALE),
                    Gender::Girl => pick(&mut rng, NAMES_FEMALE),
                };
                let surname = pick(&mut rng, SURNAMES);

                students.push(Student {
                    id: id_counter.to_string(),
                    name: format!("{surname}{given}"),
                    grade,
                    class_name,
                    gender,
                    content_type: pick(&mut rng, &ContentType::ALL),
                    link: "#".to_string(),
                    description: pick(&mut rng, DESCRIPTIONS).to_string(),
                    timestamp: now_ms - rng.random_range(0..=TIMESTAMP_SPREAD_MS),
                });
                id_counter += 1;
            }
        }
    }

    // Shuffle once so the initial gallery mixes grades and classes; the
    // persisted order is stable after this.
    students.shuffle(&mut rng);
    students
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_generates_full_cross_product() {
        let students = generate(7, NOW);
        assert_eq!(
            students.len(),
            Grade::ALL.len() * ClassName::ALL.len() * STUDENTS_PER_CLASS
        );

        let mut per_pair: HashMap<(Grade, ClassName), usize> = HashMap::new();
        for s in &students {
            *per_pair.entry((s.grade, s.class_name)).or_default() += 1;
        }
        assert_eq!(per_pair.len(), 24);
        assert!(per_pair.values().all(|&n| n == STUDENTS_PER_CLASS));
    }

    #[test]
    fn test_ids_unique_and_sequential_pool() {
        let students = generate(7, NOW);
        let ids: HashSet<&str> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), students.len());
        assert!(ids.contains("1"));
        assert!(ids.contains("480"));
    }

    #[test]
    fn test_names_come_from_pools() {
        let students = generate(7, NOW);
        for s in &students {
            let surname = SURNAMES
                .iter()
                .find(|&&sur| s.name.starts_with(sur))
                .unwrap_or_else(|| panic!("unknown surname in {}", s.name));
            let given = &s.name[surname.len()..];
            let pool = match s.gender {
                Gender::Boy => NAMES_MALE,
                Gender::Girl => NAMES_FEMALE,
            };
            assert!(pool.contains(&given), "unknown given name in {}", s.name);
        }
    }

    #[test]
    fn test_timestamps_within_spread() {
        let students = generate(7, NOW);
        for s in &students {
            assert!(s.timestamp <= NOW);
            assert!(s.timestamp >= NOW - TIMESTAMP_SPREAD_MS);
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = generate(99, NOW);
        let b = generate(99, NOW);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_order() {
        let a = generate(1, NOW);
        let b = generate(2, NOW);
        assert_ne!(a, b);
    }

    #[test]
    fn test_both_genders_present() {
        let students = generate(7, NOW);
        assert!(students.iter().any(|s| s.gender == Gender::Boy));
        assert!(students.iter().any(|s| s.gender == Gender::Girl));
    }
}
