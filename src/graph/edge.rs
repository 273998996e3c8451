use num_traits::Float;
use serde::Serialize;
use std::fmt::{self, Debug, Display};

/// An immutable weighted edge `from -> to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DirectedEdge<W> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new edge. Range and finiteness checks happen when the edge is added to a graph.
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Tail vertex
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head vertex
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<W> Display for DirectedEdge<W>
where
    W: Float + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.weight.to_f64().unwrap_or(f64::NAN);
        write!(f, "{}->{} {:.2}", self.from, self.to, weight)
    }
}
