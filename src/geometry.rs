#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    pub fn new(x: i64, y: i64) -> Self {
        Pos { x, y }
    }

    /// Manhattan distance, |dx| + |dy|.
    pub fn manhattan(self, other: Pos) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        assert_eq!(Pos::new(8, 7).manhattan(Pos::new(2, 10)), 9);
        assert_eq!(Pos::new(2, 10).manhattan(Pos::new(8, 7)), 9);
        assert_eq!(Pos::new(-3, -3).manhattan(Pos::new(-3, -3)), 0);
        assert_eq!(Pos::new(-2, 15).manhattan(Pos::new(2, 18)), 7);
    }
}
