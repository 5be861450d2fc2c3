//! Ring arithmetic helpers.

use ziwei_lunar::Branch;

/// Floor-modulo onto the twelve-sector ring.
pub const fn fix12(i: i32) -> u8 {
    i.rem_euclid(12) as u8
}

/// Floor-modulo onto the ten stems.
pub const fn fix10(i: i32) -> u8 {
    i.rem_euclid(10) as u8
}

/// The four branch triads (三合), keyed by `branch % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triad {
    /// 申子辰
    ShenZiChen,
    /// 巳酉丑
    SiYouChou,
    /// 寅午戌
    YinWuXu,
    /// 亥卯未
    HaiMaoWei,
}

impl Triad {
    pub const fn of(branch: Branch) -> Self {
        match branch.index() % 4 {
            0 => Self::ShenZiChen,
            1 => Self::SiYouChou,
            2 => Self::YinWuXu,
            _ => Self::HaiMaoWei,
        }
    }
}

/// The four seasonal groups (方), each three consecutive branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// 寅卯辰
    Spring,
    /// 巳午未
    Summer,
    /// 申酉戌
    Autumn,
    /// 亥子丑
    Winter,
}

impl Season {
    pub const fn of(branch: Branch) -> Self {
        match fix12(branch.index() as i32 - 2) / 3 {
            0 => Self::Spring,
            1 => Self::Summer,
            2 => Self::Autumn,
            _ => Self::Winter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fix12_negative() {
        assert_eq!(fix12(3 - 11), 4);
        assert_eq!(fix12(-12), 0);
        assert_eq!(fix12(-1), 11);
    }

    #[test]
    fn fix10_negative() {
        assert_eq!(fix10(-1), 9);
        assert_eq!(fix10(-20), 0);
    }

    #[test]
    fn triads() {
        assert_eq!(Triad::of(Branch::Yin), Triad::YinWuXu);
        assert_eq!(Triad::of(Branch::Xu), Triad::YinWuXu);
        assert_eq!(Triad::of(Branch::Zi), Triad::ShenZiChen);
        assert_eq!(Triad::of(Branch::Chou), Triad::SiYouChou);
        assert_eq!(Triad::of(Branch::Wei), Triad::HaiMaoWei);
    }

    #[test]
    fn seasons() {
        assert_eq!(Season::of(Branch::Yin), Season::Spring);
        assert_eq!(Season::of(Branch::Chen), Season::Spring);
        assert_eq!(Season::of(Branch::Wei), Season::Summer);
        assert_eq!(Season::of(Branch::Xu), Season::Autumn);
        assert_eq!(Season::of(Branch::Zi), Season::Winter);
        assert_eq!(Season::of(Branch::Chou), Season::Winter);
    }

    proptest! {
        #[test]
        fn fix12_in_range_and_congruent(i in -100_000i32..100_000) {
            let r = fix12(i);
            prop_assert!(r < 12);
            prop_assert_eq!((i - r as i32).rem_euclid(12), 0);
        }

        #[test]
        fn fix10_in_range_and_congruent(i in -100_000i32..100_000) {
            let r = fix10(i);
            prop_assert!(r < 10);
            prop_assert_eq!((i - r as i32).rem_euclid(10), 0);
        }
    }
}
