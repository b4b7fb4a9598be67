//! Spawn tests

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use candy_tiles::core::{spawn_items, GridDims};
use candy_tiles::types::{Cell, Item, ItemKey, ItemKind, Tile, TileKind, PALETTE};

#[test]
fn test_fills_every_tiled_cell_and_skips_holes() {
    let dims = GridDims::new(9, 9);
    let tiles: Vec<Tile> = (0..81)
        .map(|i| if i % 7 == 0 { None } else { Some(TileKind::Normal) })
        .collect();
    let items = vec![None; 81];
    let mut rng = StdRng::seed_from_u64(2024);

    let out = spawn_items(&dims, &items, &tiles, &mut rng);
    for (index, (cell, tile)) in out.iter().zip(&tiles).enumerate() {
        match tile {
            None => assert!(cell.is_none(), "hole {} got a piece", index),
            Some(_) => {
                let kind = cell.map(|i| i.kind);
                assert!(
                    matches!(kind, Some(ItemKind::Candy(c)) if PALETTE.contains(&c)),
                    "cell {} holds {:?}",
                    index,
                    kind
                );
            }
        }
    }
    assert!(items.iter().all(|c| c.is_none()));
}

#[test]
fn test_keys_unique_across_calls() {
    let dims = GridDims::new(4, 4);
    let tiles = vec![Some(TileKind::Normal); 16];
    let items = vec![None; 16];
    let mut rng = StdRng::seed_from_u64(5);

    let mut keys = HashSet::new();
    for _ in 0..10 {
        for cell in spawn_items(&dims, &items, &tiles, &mut rng) {
            let key = cell.map(|i| i.key).unwrap();
            assert!(keys.insert(key), "key {:?} reused", key);
        }
    }
    assert_eq!(keys.len(), 160);
}

#[test]
fn test_colors_roughly_uniform() {
    let dims = GridDims::new(10, 10);
    let tiles = vec![Some(TileKind::Normal); 100];
    let items = vec![None; 100];
    let mut rng = StdRng::seed_from_u64(77);

    let mut counts = [0usize; PALETTE.len()];
    for _ in 0..60 {
        for cell in spawn_items(&dims, &items, &tiles, &mut rng) {
            let color = cell.and_then(|i| i.kind.color()).unwrap();
            counts[PALETTE.iter().position(|c| *c == color).unwrap()] += 1;
        }
    }
    // 6000 draws, 1000 expected per color
    for count in counts {
        assert!((800..1200).contains(&count), "skewed counts {:?}", counts);
    }
}

proptest! {
    #[test]
    fn spawn_only_fills_empty_tiled_cells(
        seed in any::<u64>(),
        cells in prop::collection::vec((prop::bool::weighted(0.7), any::<bool>()), 1..64),
    ) {
        let dims = GridDims::new(cells.len(), 1);
        let tiles: Vec<Tile> = cells.iter().map(|(t, _)| t.then_some(TileKind::Normal)).collect();
        let items: Vec<Cell> = cells
            .iter()
            .enumerate()
            .map(|(i, (t, occupied))| (*t && *occupied).then(|| Item::new(ItemKind::Chocolate, ItemKey(i as u64))))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);

        let out = spawn_items(&dims, &items, &tiles, &mut rng);
        for index in 0..dims.len() {
            match (tiles[index], items[index]) {
                (None, _) => prop_assert!(out[index].is_none()),
                (Some(_), Some(kept)) => prop_assert_eq!(out[index], Some(kept)),
                (Some(_), None) => prop_assert!(out[index].map(|i| i.is_matchable()).unwrap_or(false)),
            }
        }
    }
}
