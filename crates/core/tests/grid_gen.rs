use hexel::{GridConfig, GridShape, HexGrid, Orientation, Point2};
use std::collections::HashSet;

fn coordinate_set<T>(grid: &HexGrid<T>) -> HashSet<(i32, i32)> {
    grid.cells().iter().map(|cell| (cell.x(), cell.y())).collect()
}

fn pointy_10() -> GridConfig {
    GridConfig {
        orientation: Orientation::Pointy,
        origin: Point2::new(0.0, 0.0),
        cell_width: 10.0,
        cell_height: 10.0,
    }
}

#[test]
fn test_parallelogram_coordinates() {
    let grid: HexGrid<()> = HexGrid::generate(
        pointy_10(),
        GridShape::Parallelogram {
            width: 2,
            height: 1,
        },
    );
    let expected: HashSet<(i32, i32)> =
        [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)].into();
    assert_eq!(coordinate_set(&grid), expected);
    assert_eq!(grid.cells().len(), 6);
}

#[test]
fn test_triangle_coordinates() {
    let grid: HexGrid<()> =
        HexGrid::generate(pointy_10(), GridShape::Triangle { side: 2 });
    let expected: HashSet<(i32, i32)> =
        [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0)].into();
    assert_eq!(coordinate_set(&grid), expected);
}

#[test]
fn test_hexagon_coordinates() {
    let grid: HexGrid<()> =
        HexGrid::generate(pointy_10(), GridShape::Hexagon { radius: 1 });
    let expected: HashSet<(i32, i32)> =
        [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1), (1, -1), (-1, 1)].into();
    assert_eq!(coordinate_set(&grid), expected);
}

#[test]
fn test_hexagon_cell_count() {
    // A hexagon of radius r has 3r(r+1) + 1 cells
    for radius in 0..5 {
        let grid: HexGrid<()> =
            HexGrid::generate(GridConfig::default(), GridShape::Hexagon {
                radius,
            });
        let expected = (3 * radius * (radius + 1) + 1) as usize;
        assert_eq!(grid.cells().len(), expected, "radius {radius}");
    }
}

#[test]
fn test_rectangle_coordinates() {
    let grid: HexGrid<()> = HexGrid::generate(
        pointy_10(),
        GridShape::Rectangle {
            width: 2,
            height: 2,
        },
    );
    // Rows 0 and 1 are unshifted, row 2 shifts back by one
    let expected: HashSet<(i32, i32)> = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, -1),
        (2, 0),
        (2, 1),
    ]
    .into();
    assert_eq!(coordinate_set(&grid), expected);
}

#[test]
fn test_negative_sizes_yield_empty_grids() {
    // Not an error, just empty enumeration ranges
    let shapes = [
        GridShape::Parallelogram {
            width: -1,
            height: 3,
        },
        GridShape::Triangle { side: -1 },
        GridShape::Hexagon { radius: -1 },
        GridShape::Rectangle {
            width: 2,
            height: -1,
        },
    ];
    for shape in shapes {
        let grid: HexGrid<()> = HexGrid::generate(GridConfig::default(), shape);
        assert!(grid.cells().is_empty(), "{shape:?}");
    }
}

#[test]
fn test_absent_lookup() {
    let grid: HexGrid<()> =
        HexGrid::generate(pointy_10(), GridShape::Hexagon { radius: 1 });
    assert!(grid.cell_at(100, 100).is_none());
    assert!(grid.cell_at(2, 0).is_none()); // just outside the disk
}

#[test]
fn test_cube_invariant_and_corner_count() {
    let grid: HexGrid<()> =
        HexGrid::generate(pointy_10(), GridShape::Rectangle {
            width: 4,
            height: 5,
        });
    for cell in &grid {
        assert_eq!(cell.x() + cell.y() + cell.z(), 0);
        assert_eq!(cell.corners().len(), 6);
    }
}

#[test]
fn test_hit_test_recovers_every_cell_center() {
    for orientation in [Orientation::Pointy, Orientation::Flat] {
        let config = GridConfig {
            orientation,
            origin: Point2::new(-35.0, 12.5),
            cell_width: 10.0,
            cell_height: 10.0,
        };
        let grid: HexGrid<()> =
            HexGrid::generate(config, GridShape::Hexagon { radius: 3 });

        for cell in &grid {
            let center = cell.center();
            let hit = grid
                .cell_at_screen_position(center.x, center.y)
                .unwrap_or_else(|| {
                    panic!("no cell under center of ({}, {})", cell.x(), cell.y())
                });
            assert_eq!((hit.x(), hit.y()), (cell.x(), cell.y()));
        }
    }
}

#[test]
fn test_hit_test_misses_outside_shape() {
    let grid: HexGrid<()> =
        HexGrid::generate(pointy_10(), GridShape::Hexagon { radius: 1 });
    // Far outside the disk; rounds to an unpopulated coordinate
    assert!(grid.cell_at_screen_position(1000.0, 1000.0).is_none());
}

#[test]
fn test_payload_mutation() {
    let mut grid: HexGrid<u32> =
        HexGrid::generate(pointy_10(), GridShape::Triangle { side: 2 });

    assert!(grid.cell_at(1, 1).unwrap().data().is_none());
    *grid.cell_at_mut(1, 1).unwrap().data_mut() = Some(42);
    assert_eq!(grid.cell_at(1, 1).unwrap().data(), Some(&42));

    // Bulk update through mutable iteration
    for cell in grid.cells_mut().iter_mut() {
        let score = (cell.x() * 10 + cell.y()) as u32;
        *cell.data_mut() = Some(score);
    }
    assert_eq!(grid.cell_at(2, 0).unwrap().data(), Some(&20));
}

#[test]
fn test_iteration_is_deterministic() {
    let generate = || -> HexGrid<()> {
        HexGrid::generate(pointy_10(), GridShape::Hexagon { radius: 2 })
    };
    let a: Vec<(i32, i32)> =
        generate().cells().iter().map(|c| (c.x(), c.y())).collect();
    let b: Vec<(i32, i32)> =
        generate().cells().iter().map(|c| (c.x(), c.y())).collect();
    assert_eq!(a, b);
    assert_eq!(a.len(), generate().cells().len());
}
