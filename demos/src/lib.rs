//! Shared helpers for the gridstar demos: an obstacle-course generator and a
//! plain-text renderer for grids with a path overlay.

use std::collections::HashSet;

use gridstar_core::{Grid, Point};
use rand::{RngExt, SeedableRng};

/// Parameters of the demo obstacle course.
#[derive(Debug, Clone)]
pub struct DemoLayout {
    pub width: i32,
    pub height: i32,
    /// Chance that any cell starts out blocked.
    pub density: f64,
    pub start: Point,
    pub goal: Point,
}

impl Default for DemoLayout {
    fn default() -> Self {
        Self {
            width: 55,
            height: 55,
            density: 0.2,
            start: Point::new(0, 0),
            goal: Point::new(45, 30),
        }
    }
}

impl DemoLayout {
    /// Build the course: random noise, two diagonal walls, three vertical
    /// walls and two horizontal barriers with a gap every 15 cells. The
    /// start and goal are always left free.
    pub fn build(&self, seed: u64) -> Grid {
        let (w, h) = (self.width, self.height);
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(w, h);

        for p in grid.bounds() {
            let r: f64 = rng.random();
            if r < self.density {
                grid.add_obstacle(p);
            }
        }

        for i in w / 10..w * 3 / 10 {
            grid.add_obstacle(Point::new(i, i));
            grid.add_obstacle(Point::new(i, h * 9 / 10 - i));
        }

        for y in h / 5..h * 4 / 5 {
            for x in [w / 4, w / 2, w * 3 / 4] {
                grid.add_obstacle(Point::new(x, y));
            }
        }

        for x in w / 10..w * 9 / 10 {
            if x % 15 != 0 {
                grid.add_obstacle(Point::new(x, h * 3 / 10));
                grid.add_obstacle(Point::new(x, h * 6 / 10));
            }
        }

        grid.remove_obstacle(self.start);
        grid.remove_obstacle(self.goal);
        grid
    }
}

/// Render `grid` top row first: `S` start, `G` goal, `*` path, `#`
/// obstacle, `.` free.
pub fn render(grid: &Grid, path: &[Point], start: Point, goal: Point) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.bounds().len() + grid.height() as usize);
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == goal {
                'G'
            } else if on_path.contains(&p) {
                '*'
            } else if grid.is_obstacle(p) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        if y > 0 {
            out.push('\n');
        }
    }
    out
}
