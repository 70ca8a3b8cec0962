//! Shape catalog tests

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_blockfall::core::{base_shape, display_color, random_piece_type, rotated_clockwise, ActivePiece};
use tui_blockfall::types::PieceKind;

#[test]
fn test_every_base_shape_has_four_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(base_shape(kind).filled_count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_matrix_sizes() {
    assert_eq!(base_shape(PieceKind::I).size(), 4);
    assert_eq!(base_shape(PieceKind::O).size(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(base_shape(kind).size(), 3);
    }
}

#[test]
fn test_spawn_columns() {
    assert_eq!(ActivePiece::spawn(PieceKind::I).x, 3);
    assert_eq!(ActivePiece::spawn(PieceKind::O).x, 4);
    assert_eq!(ActivePiece::spawn(PieceKind::T).x, 3);
    for kind in PieceKind::ALL {
        assert_eq!(ActivePiece::spawn(kind).y, 0);
    }
}

#[test]
fn test_t_rotation_cycle() {
    let t = base_shape(PieceKind::T);
    let r1 = rotated_clockwise(&t);
    // .X.    .X.
    // XXX -> .XX
    // ...    .X.
    let cells: Vec<_> = r1.filled_cells().collect();
    assert_eq!(cells, vec![(1, 0), (1, 1), (2, 1), (1, 2)]);

    let r4 = r1.rotated_clockwise().rotated_clockwise().rotated_clockwise();
    assert_eq!(r4, t);
}

#[test]
fn test_colors_are_distinct() {
    let mut colors: Vec<u32> = PieceKind::ALL.iter().map(|&k| display_color(k)).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), 7);
    assert_eq!(display_color(PieceKind::I), 0x00f0f0);
}

#[test]
fn test_random_piece_type_pairs_kind_with_base_shape() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let (kind, shape) = random_piece_type(&mut rng);
        assert_eq!(shape, base_shape(kind));
        seen[kind.index()] = true;
    }
    assert!(seen.iter().all(|&s| s));
}
