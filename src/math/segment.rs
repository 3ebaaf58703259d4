use super::point::Point;

/// A directed edge between two points.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    start_point: Point,
    end_point: Point,
}

impl Segment {
    pub fn new(start_point: Point, end_point: Point) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    pub fn start_point(&self) -> &Point {
        &self.start_point
    }

    pub fn end_point(&self) -> &Point {
        &self.end_point
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start_point, end_point): (Point, Point)) -> Self {
        Segment {
            start_point,
            end_point,
        }
    }
}
