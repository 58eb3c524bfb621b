use std::fmt;
use num_traits::{Num, Signed};
use rustc_hash::FxHashSet;

use crate::graph_algos::Graph;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Cardinal direction on a grid where y grows downward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {

    /// Clockwise, starting at Up
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self {
            Direction::Up => "↑",
            Direction::Right => "→",
            Direction::Down => "↓",
            Direction::Left => "←",
        };
        f.write_str(arrow)
    }
}


/// 2D integer point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The surrounding points, diagonals included
    /// Up to 8, offsets leaving the i64 range are dropped
    pub fn neighbors(&self) -> Vec<Point> {
        const OFFSETS: [(i64, i64); 8] = [
            (-1, -1), (0, -1), (1, -1),
            (-1, 0), (1, 0),
            (-1, 1), (0, 1), (1, 1),
        ];
        OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| Some(Point::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?)))
            .collect()
    }

    /// The points sharing an edge with this one, up to 4
    pub fn non_diagonal_neighbors(&self) -> Vec<Point> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.step(direction, 1))
            .collect()
    }

    /// Move `length` cells in `direction`, None if the move leaves the i64 range
    pub fn step(&self, direction: Direction, length: i64) -> Option<Point> {
        match direction {
            Direction::Up => Some(Point::new(self.x, self.y.checked_sub(length)?)),
            Direction::Right => Some(Point::new(self.x.checked_add(length)?, self.y)),
            Direction::Down => Some(Point::new(self.x, self.y.checked_add(length)?)),
            Direction::Left => Some(Point::new(self.x.checked_sub(length)?, self.y)),
        }
    }

    /// Direction of a straight move to `other`
    /// None when the points are equal or not on a shared row or column
    pub fn direction_to(&self, other: &Point) -> Option<Direction> {
        use std::cmp::Ordering::{Equal, Greater, Less};

        match (other.x.cmp(&self.x), other.y.cmp(&self.y)) {
            (Equal, Less) => Some(Direction::Up),
            (Equal, Greater) => Some(Direction::Down),
            (Greater, Equal) => Some(Direction::Right),
            (Less, Equal) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Saturates at i64::MAX for points at opposite ends of the range
    pub fn manhattan_distance(&self, other: &Point) -> i64 {
        let distance = self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y));
        i64::try_from(distance).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x:{} y:{}", self.x, self.y)
    }
}


/// Rectangular 4-connected grid with blocked cells
/// Moves cost 1, the heuristic is Manhattan distance
#[derive(Clone, Debug, Default)]
pub struct Grid {
    pub width: i64,
    pub height: i64,
    blocked: FxHashSet<Point>,
}

impl Grid {

    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            blocked: FxHashSet::default(),
        }
    }

    /// Mark a cell as impassable
    pub fn block(&mut self, point: Point) {
        self.blocked.insert(point);
    }

    pub fn is_blocked(&self, point: &Point) -> bool {
        self.blocked.contains(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Inside the grid and not blocked
    pub fn is_open(&self, point: &Point) -> bool {
        self.contains(point) && !self.is_blocked(point)
    }
}

impl Graph for Grid {
    type Position = Point;
    type Cost = i64;

    fn neighbors(&self, at: &Point) -> Vec<Point> {
        at.non_diagonal_neighbors()
            .into_iter()
            .filter(|p| self.is_open(p))
            .collect()
    }

    fn cost(&self, _from: &Point, _to: &Point) -> i64 {
        1
    }

    fn distance(&self, from: &Point, to: &Point) -> i64 {
        from.manhattan_distance(to)
    }
}
