//! Instance parsing and solution formatting
//!
//! The text formats are deliberately thin: a header `N K` followed by `N`
//! whitespace-separated `x y w` triples on input, and the cost / enclosed
//! count / edge list block on output.

use crate::{Error, Point, Result, Solution};

/// Parse an instance from its text form.
pub fn parse_instance(input: &str) -> Result<(Vec<Point>, usize)> {
    let mut tokens = input.split_whitespace();
    let n: usize = next_number(&mut tokens, "N")?;
    let k: usize = next_number(&mut tokens, "K")?;
    if n == 0 {
        return Err(Error::InvalidInput("N must be at least 1".into()));
    }

    let mut points = Vec::with_capacity(n);
    for idx in 1..=n {
        let x: f64 = next_number(&mut tokens, &format!("x_{}", idx))?;
        let y: f64 = next_number(&mut tokens, &format!("y_{}", idx))?;
        let w: f64 = next_number(&mut tokens, &format!("w_{}", idx))?;
        points.push(Point::new(x, y, w));
    }
    if tokens.next().is_some() {
        return Err(Error::InvalidInput(format!(
            "expected {} points, found trailing data",
            n
        )));
    }
    Ok((points, k))
}

fn next_number<'a, T, I>(tokens: &mut I, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::InvalidInput(format!("missing value for {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid value for {}: '{}'", what, token)))
}

/// Render a solution in the fixed output layout: cost, enclosed count,
/// edge count, then one `x1 y1 x2 y2` line per edge.
#[must_use]
pub fn format_solution(solution: &Solution) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:.6}\n", solution.cost));
    out.push_str(&format!("{}\n", solution.enclosed));
    out.push_str(&format!("{}\n", solution.edges.len()));
    for e in &solution.edges {
        out.push_str(&format!(
            "{:.6} {:.6} {:.6} {:.6}\n",
            e.x1, e.y1, e.x2, e.y2
        ));
    }
    out
}
