use mls_panel::{map_to_grid, parse_bits, parse_taps, Error, GridShape, PanelRequest};

fn request(seed: &str, taps: &str, grid: Option<GridShape>) -> PanelRequest {
    let seed = parse_bits(seed).unwrap();
    PanelRequest {
        degree: seed.len(),
        seed,
        taps: parse_taps(taps).unwrap(),
        grid,
    }
}

#[test]
fn default_form_values() {
    let out = request("1,0,0,1", "3,2", None).run().unwrap();

    assert_eq!(
        out.sequence.bits(),
        &[1, 0, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0]
    );
    assert!(out.sequence.is_maximal());
}

#[test]
fn panel_of_seven_by_nine() {
    // x^6 + x^5 + 1 gives a 63 bit sequence that fills a 7x9 panel exactly.
    let shape = GridShape { rows: 7, cols: 9 };
    let out = request("1,0,0,0,0,0", "5,4", Some(shape)).run().unwrap();
    let grid = out.grid.unwrap();

    assert!(out.sequence.is_maximal());
    assert_eq!(grid.view(), out.sequence.bits());
    assert_eq!(grid.holes(), 32);
}

#[test]
fn remapping_does_not_touch_the_sequence() {
    let out = request("1,0,1", "2,1", None).run().unwrap();
    let before = out.sequence.clone();

    let small = map_to_grid(&out.sequence, 2, 2).unwrap();
    let large = map_to_grid(&out.sequence, 3, 3).unwrap();

    assert_eq!(out.sequence, before);
    assert_eq!(small.view(), &before.bits()[..4]);
    assert_eq!(&large.view()[7..], &[0, 0]);
}

#[test]
fn mismatched_request_fails() {
    let req = PanelRequest {
        degree: 4,
        seed: vec![1, 0],
        taps: vec![3, 2],
        grid: Some(GridShape { rows: 4, cols: 4 }),
    };

    assert_eq!(
        req.run(),
        Err(Error::ConfigMismatch {
            seed_len: 2,
            degree: 4
        })
    );
}
