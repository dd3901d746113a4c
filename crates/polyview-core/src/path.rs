use polygeom::Vertex;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Vertex),
    LineTo(Vertex),
    QuadTo { ctrl: Vertex, to: Vertex },
    Close,
}

/// Reusable buffer of drawing commands.
///
/// The shape builders ([`Path::polygon`], [`Path::rounded_polygon`] and
/// [`Path::segment`]) expect an empty buffer; call [`Path::clear`] between
/// shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

/// A run of points produced by [`Path::flatten`].
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    pub points: Vec<Vertex>,
    pub closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn move_to(&mut self, p: Vertex) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vertex) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn quad_to(&mut self, ctrl: Vertex, to: Vertex) {
        self.commands.push(PathCommand::QuadTo { ctrl, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Closed outline through `vertices` in order.
    pub fn polygon(&mut self, vertices: &[Vertex]) {
        debug_assert!(self.is_empty(), "path must be cleared before adding a shape");

        let mut iter = vertices.iter().copied();
        if let Some(first) = iter.next() {
            self.move_to(first);
            for v in iter {
                self.line_to(v);
            }
            self.close();
        }
    }

    /// Closed outline through `vertices` with every corner replaced by a
    /// quadratic curve controlled by the corner itself. The curve starts and
    /// ends `corner_radius` along the adjacent edges, capped at half an edge.
    pub fn rounded_polygon(&mut self, vertices: &[Vertex], corner_radius: f32) {
        if corner_radius <= 0.0 || vertices.len() < 3 {
            self.polygon(vertices);
            return;
        }

        debug_assert!(self.is_empty(), "path must be cleared before adding a shape");

        let n = vertices.len();
        let corner = |i: usize| {
            let v = vertices[i];
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            (
                toward(v, prev, corner_radius),
                v,
                toward(v, next, corner_radius),
            )
        };

        let (_, _, start) = corner(0);
        self.move_to(start);

        for i in (1..n).chain(Some(0)) {
            let (before, v, after) = corner(i);
            self.line_to(before);
            self.quad_to(v, after);
        }

        self.close();
    }

    /// Open straight segment.
    pub fn segment(&mut self, from: Vertex, to: Vertex) {
        debug_assert!(self.is_empty(), "path must be cleared before adding a shape");

        self.move_to(from);
        self.line_to(to);
    }

    /// Converts the commands into polylines, splitting each curve into
    /// `segments_per_curve` straight pieces.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Subpath> {
        let segments = segments_per_curve.max(1);
        let mut subpaths = Vec::new();
        let mut current: Option<Subpath> = None;
        let mut cursor = Vertex::ORIGIN;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    subpaths.extend(current.take());
                    current = Some(Subpath::starting_at(p));
                    cursor = p;
                }
                PathCommand::LineTo(p) => {
                    current
                        .get_or_insert_with(|| Subpath::starting_at(cursor))
                        .points
                        .push(p);
                    cursor = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    let subpath = current.get_or_insert_with(|| Subpath::starting_at(cursor));
                    for step in 1..segments {
                        let t = step as f32 / segments as f32;
                        subpath.points.push(quad_point(cursor, ctrl, to, t));
                    }
                    subpath.points.push(to);
                    cursor = to;
                }
                PathCommand::Close => {
                    if let Some(mut subpath) = current.take() {
                        let points = &mut subpath.points;
                        if points.len() > 1 && points.first() == points.last() {
                            points.pop();
                        }
                        subpath.closed = true;
                        cursor = subpath.points[0];
                        subpaths.push(subpath);
                    }
                }
            }
        }

        subpaths.extend(current);
        subpaths
    }
}

impl Subpath {
    fn starting_at(p: Vertex) -> Self {
        Self {
            points: vec![p],
            closed: false,
        }
    }
}

fn toward(from: Vertex, to: Vertex, distance: f32) -> Vertex {
    let length = from.distance_to(to);
    if length == 0.0 {
        return from;
    }

    from.lerp(to, distance.min(length * 0.5) / length)
}

fn quad_point(from: Vertex, ctrl: Vertex, to: Vertex, t: f32) -> Vertex {
    from.lerp(ctrl, t).lerp(ctrl.lerp(to, t), t)
}
