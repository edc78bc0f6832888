//! Stückweise kubische Bézier-Kurve.
//!
//! Zwischen zwei aufeinanderfolgenden Keys `k0`, `k1` liegt ein Segment mit den
//! Bézier-Punkten `{k0.control, k0.control + k0.right, k1.control + k1.left, k1.control}`.
//!
//! ## Punkt-IDs
//!
//! Jeder Key trägt drei logische Punkte, adressiert über eine flache Punkt-ID:
//! `key_id = round(point_id / 3)`, `point_id % 3` wählt 0 = Kontrollpunkt,
//! 1 = rechte Tangente, 2 = linke Tangente. Die erste linke und die letzte rechte
//! Tangente sind nicht adressierbar, daher `points_count = 3 * keys - 2`.

use crate::bezier::{approx_length, cubic_bezier, cubic_bezier_scalar};
use crate::error::CurveError;
use crate::extrems::CurveExtrems;
use crate::key::{CurveKey, PointSlot, PointSpace, TangentMode};
use crate::point::Point;

/// Segment und lokaler Parameter einer Auswertung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLocation {
    /// Key am Segmentanfang
    pub first_key_id: usize,
    /// Key am Segmentende (`first_key_id + 1`)
    pub last_key_id: usize,
    /// Lokaler Parameter in `[0, 1]`
    pub t: f32,
}

/// Editierbare Bézier-Kurve mit gecachter Bogenlänge.
///
/// Die Länge wird bei jeder Mutation nur als veraltet markiert und beim
/// nächsten [`length`](Self::length)-Aufruf neu berechnet.
#[derive(Debug, Clone, Default)]
pub struct Curve {
    keys: Vec<CurveKey>,
    length: f32,
    is_length_dirty: bool,
}

impl PartialEq for Curve {
    /// Vergleicht nur die Keys, nicht den Längen-Cache.
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Curve {
    /// Anzahl der Abtastschritte für die Bogenlänge.
    pub const LENGTH_SAMPLES: usize = 100;

    /// Erstellt eine leere (ungültige) Kurve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Kurve aus einer Key-Liste; die Länge ist danach veraltet.
    pub fn from_keys(keys: Vec<CurveKey>) -> Self {
        Self {
            keys,
            length: 0.0,
            is_length_dirty: true,
        }
    }

    // ── Zählung & Validierung ───────────────────────────────────────

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn keys_count(&self) -> usize {
        self.keys.len()
    }

    /// Anzahl der Bézier-Segmente.
    pub fn curves_count(&self) -> usize {
        self.keys.len().saturating_sub(1)
    }

    /// Anzahl adressierbarer Punkte, `(keys - 2) * 3 + 4`; 0 für eine leere Kurve.
    pub fn points_count(&self) -> usize {
        match self.keys.len() {
            0 => 0,
            n => 3 * n - 2,
        }
    }

    /// Auswertbar erst ab zwei Keys.
    pub fn is_valid(&self) -> bool {
        self.keys.len() >= 2
    }

    pub fn is_valid_key_id(&self, key_id: usize) -> bool {
        key_id < self.keys.len()
    }

    pub fn is_valid_point_id(&self, point_id: usize) -> bool {
        point_id < self.points_count()
    }

    /// Key einer Punkt-ID: `round(point_id / 3)`.
    pub fn point_key_id(point_id: usize) -> usize {
        point_id / 3 + usize::from(point_id % 3 == 2)
    }

    /// Punkt-ID des Kontrollpunkts eines Keys.
    pub fn key_to_point_id(key_id: usize) -> usize {
        key_id * 3
    }

    pub fn is_control_point_id(point_id: usize) -> bool {
        point_id % 3 == 0
    }

    // ── Keys ────────────────────────────────────────────────────────

    /// Hängt einen Key an. Die X-Ordnung wird nicht geprüft.
    pub fn add_key(&mut self, key: CurveKey) {
        self.keys.push(key);
        self.mark_length_dirty();
    }

    /// Fügt einen Key vor `key_id` ein (`key_id == keys_count()` hängt an).
    pub fn insert_key(&mut self, key_id: usize, key: CurveKey) -> Result<(), CurveError> {
        if key_id > self.keys.len() {
            return Err(self.key_out_of_range(key_id));
        }
        self.keys.insert(key_id, key);
        self.mark_length_dirty();
        Ok(())
    }

    /// Entfernt einen Key. Blockiert nicht unterhalb von zwei Keys.
    pub fn remove_key(&mut self, key_id: usize) -> Result<CurveKey, CurveError> {
        self.check_key_id(key_id)?;
        let key = self.keys.remove(key_id);
        self.mark_length_dirty();
        Ok(key)
    }

    pub fn key(&self, key_id: usize) -> Result<&CurveKey, CurveError> {
        self.keys
            .get(key_id)
            .ok_or_else(|| self.key_out_of_range(key_id))
    }

    /// Mutabler Key-Zugriff; markiert die Länge als veraltet.
    pub fn key_mut(&mut self, key_id: usize) -> Result<&mut CurveKey, CurveError> {
        self.check_key_id(key_id)?;
        self.is_length_dirty = true;
        Ok(&mut self.keys[key_id])
    }

    // ── Punkte ──────────────────────────────────────────────────────

    /// Liest einen Punkt. Kontrollpunkte sind immer global.
    pub fn point(&self, point_id: usize, space: PointSpace) -> Result<Point, CurveError> {
        let key = self.key(self.checked_point_key_id(point_id)?)?;
        let point = match (PointSlot::of_point_id(point_id), space) {
            (PointSlot::Control, _) => key.control,
            (PointSlot::RightTangent, PointSpace::Local) => key.right_tangent,
            (PointSlot::RightTangent, PointSpace::Global) => key.right_tangent_global(),
            (PointSlot::LeftTangent, PointSpace::Local) => key.left_tangent,
            (PointSlot::LeftTangent, PointSpace::Global) => key.left_tangent_global(),
        };
        Ok(point)
    }

    /// Schreibt einen Punkt roh, ohne Tangenten-Constraint. Tangenten sind lokal.
    pub fn set_point(&mut self, point_id: usize, point: Point) -> Result<(), CurveError> {
        let key_id = self.checked_point_key_id(point_id)?;
        let key = &mut self.keys[key_id];
        match PointSlot::of_point_id(point_id) {
            PointSlot::Control => key.control = point,
            PointSlot::RightTangent => key.right_tangent = point,
            PointSlot::LeftTangent => key.left_tangent = point,
        }
        self.mark_length_dirty();
        Ok(())
    }

    /// Setzt eine Tangente und führt die Geschwister-Tangente gemäß Modus nach.
    ///
    /// Kontrollpunkt-IDs werden mit [`CurveError::NotATangentPoint`] abgelehnt.
    pub fn set_tangent_point(
        &mut self,
        point_id: usize,
        point: Point,
        space: PointSpace,
    ) -> Result<(), CurveError> {
        let key_id = self.checked_point_key_id(point_id)?;
        let key = &mut self.keys[key_id];

        let tangent = match space {
            PointSpace::Local => point,
            PointSpace::Global => point - key.control,
        };

        match PointSlot::of_point_id(point_id) {
            PointSlot::Control => return Err(CurveError::NotATangentPoint { point_id }),
            PointSlot::RightTangent => key.set_right_tangent(tangent),
            PointSlot::LeftTangent => key.set_left_tangent(tangent),
        }
        self.mark_length_dirty();
        Ok(())
    }

    // ── Tangenten-Modus ─────────────────────────────────────────────

    /// Setzt den Modus eines Keys.
    ///
    /// Mit `apply_constraint` wird die rechte Tangente sofort an der linken
    /// ausgerichtet (die linke Tangente ist immer die Quelle).
    pub fn set_tangent_mode(
        &mut self,
        key_id: usize,
        mode: TangentMode,
        apply_constraint: bool,
    ) -> Result<(), CurveError> {
        self.check_key_id(key_id)?;
        let key = &mut self.keys[key_id];
        key.tangent_mode = mode;

        if apply_constraint {
            let left = key.left_tangent;
            key.set_left_tangent(left);
            self.mark_length_dirty();
        }
        Ok(())
    }

    pub fn tangent_mode(&self, key_id: usize) -> Result<TangentMode, CurveError> {
        Ok(self.key(key_id)?.tangent_mode)
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Punkt bei normiertem Kurvenparameter `t` (auf `[0, 1]` geklemmt).
    pub fn evaluate_by_percent(&self, t: f32) -> Result<Point, CurveError> {
        let location = self.find_evaluation_keys_id_by_percent(t)?;
        Ok(self.interpolate(location))
    }

    /// Punkt bei Distanz `d` entlang der Kurve, approximiert über `d / length`.
    ///
    /// Berechnet die Länge bei Bedarf neu, daher `&mut self`.
    pub fn evaluate_by_distance(&mut self, d: f32) -> Result<Point, CurveError> {
        let location = self.find_evaluation_keys_id_by_distance(d)?;
        Ok(self.interpolate(location))
    }

    /// Y-Wert bei Zeit `time`, wobei `control.x` der Keys als Zeitachse dient.
    ///
    /// Außerhalb des Key-Bereichs wird auf das Y des ersten bzw. letzten Keys
    /// geklemmt. Innerhalb werden nur die Y-Komponenten interpoliert; die
    /// X-Komponenten der Tangenten gehen nicht ein.
    pub fn evaluate_by_time(&self, time: f32) -> Result<f32, CurveError> {
        self.ensure_valid()?;

        let first = self.keys[0].control;
        let last = self.keys[self.keys.len() - 1].control;
        if time <= first.x {
            return Ok(first.y);
        }
        if time >= last.x {
            return Ok(last.y);
        }

        let (first_key_id, last_key_id) = self.find_evaluation_keys_id_by_time(time)?;
        let k0 = &self.keys[first_key_id];
        let k1 = &self.keys[last_key_id];

        let time_diff = k1.control.x - k0.control.x;
        // Degeneriertes Segment, keine Division durch 0
        if time_diff <= 0.0 {
            return Ok(k0.control.y);
        }
        let t = (time - k0.control.x) / time_diff;

        Ok(cubic_bezier_scalar(
            k0.control.y,
            k0.control.y + k0.right_tangent.y,
            k1.control.y + k1.left_tangent.y,
            k1.control.y,
            t,
        ))
    }

    /// Segment und lokales `t` für einen globalen Parameter.
    ///
    /// `t >= 1` liefert das letzte Segment mit lokalem `t = 1`.
    pub fn find_evaluation_keys_id_by_percent(
        &self,
        t: f32,
    ) -> Result<SegmentLocation, CurveError> {
        self.ensure_valid()?;
        Ok(self.locate_percent(t))
    }

    /// Umschließendes Key-Paar für `time` per Lower-Bound über `keys[1..count-1]`.
    pub fn find_evaluation_keys_id_by_time(&self, time: f32) -> Result<(usize, usize), CurveError> {
        self.ensure_valid()?;

        let mut first_id = 1;
        let mut count = self.keys.len() - 1 - first_id;
        while count > 0 {
            let step = count / 2;
            let middle_id = first_id + step;
            if time >= self.keys[middle_id].control.x {
                first_id = middle_id + 1;
                count -= step + 1;
            } else {
                count = step;
            }
        }

        Ok((first_id - 1, first_id))
    }

    /// Segment und lokales `t` für eine Distanz entlang der Kurve.
    pub fn find_evaluation_keys_id_by_distance(
        &mut self,
        d: f32,
    ) -> Result<SegmentLocation, CurveError> {
        self.ensure_valid()?;
        let percent = self.distance_to_percent(d);
        Ok(self.locate_percent(percent))
    }

    // ── Extrema & Länge ─────────────────────────────────────────────

    /// Extrema über alle adressierbaren Punkte im globalen Raum.
    pub fn extrems(&self) -> Result<CurveExtrems, CurveError> {
        self.ensure_valid()?;

        let mut extrems = CurveExtrems::empty();
        for point_id in 0..self.points_count() {
            extrems.include(self.point(point_id, PointSpace::Global)?);
        }
        Ok(extrems)
    }

    /// Bogenlänge; berechnet neu, falls seit der letzten Mutation veraltet.
    pub fn length(&mut self) -> f32 {
        if self.is_length_dirty {
            self.length = self.compute_length();
            self.is_length_dirty = false;
            log::trace!(
                "Kurvenlänge neu berechnet: {:.3} ({} Keys)",
                self.length,
                self.keys.len()
            );
        }
        self.length
    }

    /// Gecachte Länge, `None` solange sie veraltet ist.
    pub fn cached_length(&self) -> Option<f32> {
        (!self.is_length_dirty).then_some(self.length)
    }

    pub fn is_length_dirty(&self) -> bool {
        self.is_length_dirty
    }

    fn compute_length(&self) -> f32 {
        if !self.is_valid() {
            return 0.0;
        }
        approx_length(
            |t| self.interpolate(self.locate_percent(t)),
            Self::LENGTH_SAMPLES,
        )
    }

    // ── Nächster Punkt ──────────────────────────────────────────────

    /// Globaler Parameter des Kurvenpunkts, der `target` am nächsten liegt.
    ///
    /// Grobe Abtastung mit `samples` Schritten, danach Goldener-Schnitt-Verfeinerung
    /// im Nachbarschaftsintervall des besten Samples.
    pub fn nearest_percent_to(&self, target: Point, samples: usize) -> Result<f32, CurveError> {
        self.ensure_valid()?;
        let samples = samples.max(1);
        let distance_sq = |t: f32| self.interpolate(self.locate_percent(t)).distance_squared(target);

        let mut best_t = 0.0;
        let mut best_dist = f32::INFINITY;
        for i in 0..=samples {
            let t = i as f32 / samples as f32;
            let dist = distance_sq(t);
            if dist < best_dist {
                best_dist = dist;
                best_t = t;
            }
        }

        let step = 1.0 / samples as f32;
        let refined = golden_section_min(
            &distance_sq,
            (best_t - step).max(0.0),
            (best_t + step).min(1.0),
        );
        // Nachbarschaft nicht unimodal: grobes Sample behalten
        if distance_sq(refined) <= best_dist {
            Ok(refined)
        } else {
            Ok(best_t)
        }
    }

    pub fn nearest_point_to(&self, target: Point, samples: usize) -> Result<Point, CurveError> {
        let t = self.nearest_percent_to(target, samples)?;
        self.evaluate_by_percent(t)
    }

    /// Distanz entlang der Kurve bis zum nächsten Punkt an `target`.
    ///
    /// Invers zu [`evaluate_by_distance`](Self::evaluate_by_distance).
    pub fn nearest_distance_to(&mut self, target: Point, samples: usize) -> Result<f32, CurveError> {
        let t = self.nearest_percent_to(target, samples)?;
        Ok(t * self.length())
    }

    // ── Interne Helfer ──────────────────────────────────────────────

    fn mark_length_dirty(&mut self) {
        self.is_length_dirty = true;
    }

    fn ensure_valid(&self) -> Result<(), CurveError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CurveError::InvalidCurve {
                keys_count: self.keys.len(),
            })
        }
    }

    fn key_out_of_range(&self, key_id: usize) -> CurveError {
        CurveError::KeyIndexOutOfRange {
            key_id,
            keys_count: self.keys.len(),
        }
    }

    fn check_key_id(&self, key_id: usize) -> Result<(), CurveError> {
        if self.is_valid_key_id(key_id) {
            Ok(())
        } else {
            Err(self.key_out_of_range(key_id))
        }
    }

    fn checked_point_key_id(&self, point_id: usize) -> Result<usize, CurveError> {
        if self.is_valid_point_id(point_id) {
            Ok(Self::point_key_id(point_id))
        } else {
            Err(CurveError::PointIndexOutOfRange {
                point_id,
                points_count: self.points_count(),
            })
        }
    }

    fn distance_to_percent(&mut self, d: f32) -> f32 {
        let length = self.length();
        if length > 0.0 { d / length } else { 0.0 }
    }

    /// Voraussetzung: `is_valid()`.
    fn locate_percent(&self, t: f32) -> SegmentLocation {
        let curves_count = self.curves_count();
        if t >= 1.0 {
            return SegmentLocation {
                first_key_id: curves_count - 1,
                last_key_id: curves_count,
                t: 1.0,
            };
        }

        // f32::max verwirft NaN, NaN landet damit auf 0
        let scaled = t.max(0.0) * curves_count as f32;
        let segment = (scaled.floor() as usize).min(curves_count - 1);
        SegmentLocation {
            first_key_id: segment,
            last_key_id: segment + 1,
            t: (scaled - segment as f32).clamp(0.0, 1.0),
        }
    }

    fn interpolate(&self, location: SegmentLocation) -> Point {
        let k0 = &self.keys[location.first_key_id];
        let k1 = &self.keys[location.last_key_id];
        cubic_bezier(
            k0.control,
            k0.right_tangent_global(),
            k1.left_tangent_global(),
            k1.control,
            location.t,
        )
    }
}

/// Minimum einer unimodalen Funktion auf `[lo, hi]` per Goldenem Schnitt.
fn golden_section_min(f: impl Fn(f32) -> f32, mut lo: f32, mut hi: f32) -> f32 {
    const INV_PHI: f32 = 0.618_034;
    const ITERATIONS: usize = 24;

    let mut c = hi - INV_PHI * (hi - lo);
    let mut d = lo + INV_PHI * (hi - lo);
    let mut fc = f(c);
    let mut fd = f(d);
    for _ in 0..ITERATIONS {
        if fc < fd {
            hi = d;
            d = c;
            fd = fc;
            c = hi - INV_PHI * (hi - lo);
            fc = f(c);
        } else {
            lo = c;
            c = d;
            fc = fd;
            d = lo + INV_PHI * (hi - lo);
            fd = f(d);
        }
    }
    (lo + hi) * 0.5
}
