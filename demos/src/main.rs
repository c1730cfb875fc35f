//! Traces the active bound list through the scanbeams of two overlapping squares.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to also see the engine's own logging.
use cavalier_clipper::{
    bound::PolygonType,
    geometry::Point,
    local_minimum::LocalMinimumList,
    ring,
    sweep::{is_contributing, ClipOptions, ClipSweep, ClipType, FillType, RingStarts},
    BuildError,
};
use env_logger::Env;

fn main() -> Result<(), BuildError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    for clip_type in [
        ClipType::Intersection,
        ClipType::Union,
        ClipType::Difference,
        ClipType::Xor,
    ] {
        log::info!("{clip_type:?}");
        let mut sweep = squares_sweep(clip_type)?;
        run(&mut sweep);
        for r in sweep.rings().rings() {
            log::info!("  ring {} starts at ({}, {})", r.index.0, r.point.x, r.point.y);
        }
    }

    Ok(())
}

fn squares_sweep(clip_type: ClipType) -> Result<ClipSweep, BuildError> {
    let subject: Vec<Point<i64>> = ring![(0, 0), (2, 0), (2, 2), (0, 2)];
    let clip: Vec<Point<i64>> = ring![(1, 1), (3, 1), (3, 3), (1, 3)];
    let mut minima = LocalMinimumList::new();
    minima.add_ring(&subject, PolygonType::Subject)?;
    minima.add_ring(&clip, PolygonType::Clip)?;

    let options = ClipOptions::with_fill(clip_type, FillType::NonZero);
    Ok(ClipSweep::new(minima, options, RingStarts::new()))
}

fn run(sweep: &mut ClipSweep) {
    while let Some(y) = sweep.pop_scanbeam() {
        sweep.update_current_x(y);
        top_of_scanbeam(sweep, y);
        sweep.insert_local_minima(y);
        log_active_bounds(sweep, y);
    }
}

/// Bounds ending or turning at `y` move on, then minima at `y` starting with a horizontal edge
/// are inserted and walked along their bottom horizontal.
fn top_of_scanbeam(sweep: &mut ClipSweep, y: i64) {
    advance_past(sweep, y);
    sweep.insert_horizontal_local_minima(y);
    advance_past(sweep, y);
}

/// Step every active bound past sweep line `y`, bounds topping out are removed.
///
/// Crossings between bounds are not resolved, winding counts are only accurate up to the first
/// intersection.
fn advance_past(sweep: &mut ClipSweep, y: i64) {
    let mut pos = sweep.abl().len();
    while pos > 0 {
        pos -= 1;
        let idx = sweep.abl()[pos];
        loop {
            let bound = &sweep.bounds()[idx];
            let maxima = bound.is_maxima(y);
            let intermediate = bound.is_intermediate(y);
            if maxima {
                let (abl, _) = sweep.abl_and_bounds_mut();
                abl.remove(pos);
                log::debug!("bound {idx:?} reached its maximum at y = {y}");
                break;
            }
            if !intermediate {
                break;
            }
            sweep.advance_bound(idx);
        }
    }
}

fn log_active_bounds(sweep: &ClipSweep, y: i64) {
    let o = *sweep.options();
    log::info!("  y = {y}");
    for b in sweep.active_bounds() {
        let contributing = is_contributing(b, o.clip_type, o.subject_fill_type, o.clip_fill_type);
        log::info!(
            "    {:?} x = {:.1} wc = {} wc2 = {}{}",
            b.poly_type,
            b.current_x,
            b.winding_count,
            b.winding_count2,
            if contributing { " (contributing)" } else { "" }
        );
    }
}
