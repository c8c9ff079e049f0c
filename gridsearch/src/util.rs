use anyhow::{anyhow, bail};

use crate::grid::{Grid, Point};

/// Build a grid from an ASCII drawing, one line per row.
///
/// `.` is an empty cell, `#` a wall, `S` the start and `E` the end. Leading and trailing
/// whitespace on every line is ignored, blank lines are skipped.
pub fn parse_grid(text: &str) -> Result<Grid, anyhow::Error> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let rows = lines.len();
    let columns = lines.first().map_or(0, |line| line.chars().count());

    let mut start = None;
    let mut end = None;
    let mut walls = Vec::new();

    for (row, line) in lines.iter().enumerate() {
        if line.chars().count() != columns {
            bail!("row {} has {} cells, expected {}", row, line.chars().count(), columns);
        }

        for (col, c) in line.chars().enumerate() {
            let p = Point::new(row, col);
            match c {
                '.' => {}
                '#' => walls.push(p),
                'S' if start.is_none() => start = Some(p),
                'E' if end.is_none() => end = Some(p),
                'S' | 'E' => bail!("more than one '{}' in the grid", c),
                _ => bail!("invalid cell '{}' at {}", c, p),
            }
        }
    }

    let start = start.ok_or_else(|| anyhow!("the grid has no start cell"))?;
    let end = end.ok_or_else(|| anyhow!("the grid has no end cell"))?;

    let mut grid = Grid::new(rows, columns, start, end)?;
    for p in walls {
        grid.set_wall(p)?;
    }

    Ok(grid)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Tile;

    #[test]
    fn test_parse_grid() {
        let grid = parse_grid(
            "
            S.#
            .#E
            ",
        )
        .unwrap();

        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.start(), Point::new(0, 0));
        assert_eq!(grid.end(), Point::new(1, 2));
        assert_eq!(grid.tile(Point::new(0, 2)), Some(Tile::Wall));
        assert_eq!(grid.tile(Point::new(1, 0)), Some(Tile::Empty));
        assert!(!grid.is_bordered());
        assert_eq!(grid.to_string(), "S.#\n.#E\n");
    }

    #[test]
    fn test_parse_grid_errors() {
        assert!(parse_grid("S..\n..").is_err());
        assert!(parse_grid("S..\n...").is_err());
        assert!(parse_grid("..E\n...").is_err());
        assert!(parse_grid("S.E\nS..").is_err());
        assert!(parse_grid("S.E\n.x.").is_err());
        assert!(parse_grid("").is_err());
    }
}
