use alloc::vec::Vec;

/// A point in glyph space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, stored as its minimum corner plus a
/// non-negative width and height.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Build the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self {
            x: min_x,
            y: min_y,
            w: a.x.max(b.x) - min_x,
            h: a.y.max(b.y) - min_y,
        }
    }

    /// Top-left (minimum) corner.
    pub fn min(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bottom-right (maximum) corner.
    pub fn max(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    /// Map both corners through `transform` and re-normalize.
    ///
    /// This is exact for the axis-preserving maps used during composition
    /// (translations, scales and quarter-turn rotations).
    pub fn transform(&self, transform: &Affine) -> Self {
        Self::from_corners(transform.apply(self.min()), transform.apply(self.max()))
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Self {
        let min = Point::new(self.x.min(other.x), self.y.min(other.y));
        let max = Point::new(
            (self.x + self.w).max(other.x + other.w),
            (self.y + self.h).max(other.y + other.h),
        );
        Self::from_corners(min, max)
    }
}

/// A 2D affine point map: `(x, y) -> (a*x + b*y + c, d*x + e*y + f)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.b * p.y + self.c,
            self.d * p.x + self.e * p.y + self.f,
        )
    }

    /// The map that applies `self` first and `next` second.
    pub fn then(&self, next: &Affine) -> Self {
        Self::new(
            next.a * self.a + next.b * self.d,
            next.a * self.b + next.b * self.e,
            next.a * self.c + next.b * self.f + next.c,
            next.d * self.a + next.e * self.d,
            next.d * self.b + next.e * self.e,
            next.d * self.c + next.e * self.f + next.f,
        )
    }
}

/// An ordered list of points forming a closed, filled outline.
pub type Polygon = Vec<Point>;

/// An immutable set of polygons together with the rectangle that bounds them.
///
/// The bounding rectangle is the symbol's declared box, which need not be the
/// tight hull of its polygons.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    polygons: Vec<Polygon>,
    bounds: Rect,
}

impl Shape {
    pub fn new(polygons: Vec<Polygon>, bounds: Rect) -> Self {
        Self { polygons, bounds }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Return a copy of this shape with every point mapped through `transform`.
    pub fn transform(&self, transform: &Affine) -> Self {
        let polygons = self
            .polygons
            .iter()
            .map(|polygon| polygon.iter().map(|&p| transform.apply(p)).collect())
            .collect();

        Self {
            polygons,
            bounds: self.bounds.transform(transform),
        }
    }

    /// The map that carries this shape's bounds exactly onto `target`.
    ///
    /// A degenerate axis is translated but not scaled.
    pub fn fit_transform(&self, target: &Rect) -> Affine {
        let sx = if self.bounds.w == 0.0 {
            1.0
        } else {
            target.w / self.bounds.w
        };
        let sy = if self.bounds.h == 0.0 {
            1.0
        } else {
            target.h / self.bounds.h
        };

        Affine::translate(-self.bounds.x, -self.bounds.y)
            .then(&Affine::scale(sx, sy))
            .then(&Affine::translate(target.x, target.y))
    }

    /// Rescale and move this shape so its bounds coincide with `target`.
    pub fn fit_to(&self, target: &Rect) -> Self {
        self.transform(&self.fit_transform(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    fn shapes_close(a: &Shape, b: &Shape) -> bool {
        close(a.bounds().min(), b.bounds().min())
            && close(a.bounds().max(), b.bounds().max())
            && a.polygons().len() == b.polygons().len()
            && a.polygons().iter().zip(b.polygons()).all(|(pa, pb)| {
                pa.len() == pb.len() && pa.iter().zip(pb).all(|(&p, &q)| close(p, q))
            })
    }

    fn square() -> Shape {
        Shape::new(
            vec![vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ]],
            Rect::new(0.0, 0.0, 10.0, 10.0),
        )
    }

    #[test]
    fn rect_from_corners_normalizes() {
        let rect = Rect::from_corners(Point::new(4.0, -1.0), Point::new(-2.0, 3.0));
        assert_eq!(rect, Rect::new(-2.0, -1.0, 6.0, 4.0));
    }

    #[test]
    fn quarter_turn_keeps_rect_axis_aligned() {
        // (x, y) -> (10 - y, x)
        let turn = Affine::new(0.0, -1.0, 10.0, 1.0, 0.0, 0.0);
        let rect = Rect::new(0.0, -3.0, 10.0, 2.0).transform(&turn);
        assert_eq!(rect, Rect::new(11.0, 0.0, 2.0, 10.0));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, -2.0, 1.0, 1.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -2.0, 6.0, 3.0));
    }

    #[test]
    fn transform_does_not_mutate_source() {
        let shape = square();
        let moved = shape.transform(&Affine::translate(3.0, 4.0));
        assert_eq!(shape, square());
        assert_eq!(moved.bounds(), Rect::new(3.0, 4.0, 10.0, 10.0));
        assert_eq!(moved.polygons()[0][2], Point::new(13.0, 14.0));
    }

    #[test]
    fn fit_to_offset_target() {
        let fitted = square()
            .transform(&Affine::translate(7.0, 7.0))
            .fit_to(&Rect::new(3.0, 3.0, 4.0, 4.0));
        assert_eq!(fitted.bounds(), Rect::new(3.0, 3.0, 4.0, 4.0));
        assert_eq!(fitted.polygons()[0][0], Point::new(3.0, 3.0));
        assert_eq!(fitted.polygons()[0][2], Point::new(7.0, 7.0));
    }

    #[test]
    fn fit_degenerate_axis_only_translates() {
        let line = Shape::new(
            vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]],
            Rect::new(0.0, 0.0, 10.0, 0.0),
        );
        let fitted = line.fit_to(&Rect::new(1.0, 2.0, 5.0, 5.0));
        assert_eq!(fitted.polygons()[0][1], Point::new(6.0, 2.0));
    }

    fn finite() -> impl Strategy<Value = f64> {
        -100.0f64..100.0
    }

    fn affine() -> impl Strategy<Value = Affine> {
        (finite(), finite(), finite(), finite(), finite(), finite())
            .prop_map(|(a, b, c, d, e, f)| Affine::new(a, b, c, d, e, f))
    }

    fn target() -> impl Strategy<Value = Rect> {
        (finite(), finite(), 0.5f64..50.0, 0.5f64..50.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn fit_is_idempotent(rect in target(), src in target()) {
            let once = square().fit_to(&src).fit_to(&rect);
            let twice = once.fit_to(&rect);
            prop_assert!(shapes_close(&once, &twice));
        }

        #[test]
        fn transform_composition(a in affine(), b in affine(), x in finite(), y in finite()) {
            let p = Point::new(x, y);
            let stepwise = b.apply(a.apply(p));
            let combined = a.then(&b).apply(p);
            let tolerance = 1e-6 * (1.0 + stepwise.x.abs().max(stepwise.y.abs()));
            prop_assert!((stepwise.x - combined.x).abs() < tolerance);
            prop_assert!((stepwise.y - combined.y).abs() < tolerance);
        }

        #[test]
        fn then_is_associative(a in affine(), b in affine(), c in affine(), x in finite(), y in finite()) {
            let p = Point::new(x, y);
            let left = a.then(&b).then(&c).apply(p);
            let right = a.then(&b.then(&c)).apply(p);
            let tolerance = 1e-6 * (1.0 + left.x.abs().max(left.y.abs()));
            prop_assert!((left.x - right.x).abs() < tolerance);
            prop_assert!((left.y - right.y).abs() < tolerance);
        }
    }
}
