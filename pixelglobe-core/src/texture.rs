//! Low-resolution equirectangular world texture.
//!
//! The texture is authored as a list of inclusive column ranges per row and
//! expanded into a full grid at compile time.

/// Texture height in cells (north pole at row 0).
pub const ROWS: usize = 28;
/// Texture width in cells (column 0 at 180° longitude).
pub const COLS: usize = 56;

/// Surface classification of a texture cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Terrain {
    #[default]
    Ocean = 0,
    Land = 1,
    Ice = 2,
}

impl Terrain {
    /// Numeric classification code.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Inclusive column span painted with one terrain type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: usize,
    pub end: usize,
    pub terrain: Terrain,
}

impl RangeSpec {
    pub const fn new(start: usize, end: usize, terrain: Terrain) -> Self {
        Self {
            start,
            end,
            terrain,
        }
    }
}

/// Land span (the default terrain of the shorthand).
pub const fn land(start: usize, end: usize) -> RangeSpec {
    RangeSpec::new(start, end, Terrain::Land)
}

/// Ice span.
pub const fn ice(start: usize, end: usize) -> RangeSpec {
    RangeSpec::new(start, end, Terrain::Ice)
}

/// Expand one row: ocean everywhere, then each span in order.
///
/// Columns past `COLS - 1` are an authoring error and panic (a compile error
/// when evaluated in a const context).
pub const fn build_row(ranges: &[RangeSpec]) -> [Terrain; COLS] {
    let mut row = [Terrain::Ocean; COLS];
    let mut i = 0;
    while i < ranges.len() {
        let span = ranges[i];
        let mut col = span.start;
        while col <= span.end {
            row[col] = span.terrain;
            col += 1;
        }
        i += 1;
    }
    row
}

/// Immutable `ROWS × COLS` terrain grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureMap {
    cells: [[Terrain; COLS]; ROWS],
}

impl TextureMap {
    /// Build the grid from exactly `ROWS` row specs, north to south.
    pub const fn from_rows(rows: &[&[RangeSpec]; ROWS]) -> Self {
        let mut cells = [[Terrain::Ocean; COLS]; ROWS];
        let mut r = 0;
        while r < ROWS {
            cells[r] = build_row(rows[r]);
            r += 1;
        }
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Terrain {
        self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> &[Terrain; COLS] {
        &self.cells[row]
    }

    /// Count cells of one terrain type.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == terrain)
            .count()
    }
}

// Cols: 0 = 180°W (Date Line), 14 = 90°W, 28 = 0° (Greenwich), 42 = 90°E
// Rows: 0 = North Pole, 14 = Equator, 27 = South Pole
#[rustfmt::skip]
const EARTH_ROWS: [&[RangeSpec]; ROWS] = [
    &[ice(10, 12), ice(18, 20), ice(39, 42)],                                              //  0 87°N arctic ice
    &[ice(9, 13), ice(17, 21), ice(37, 44)],                                               //  1 81°N arctic ice
    &[land(7, 7), land(9, 13), ice(18, 21), land(29, 29), land(37, 48)],                   //  2 74°N Canada, Greenland, Svalbard, Siberia
    &[land(5, 7), land(8, 14), ice(17, 22), land(25, 25), land(29, 31), land(33, 49)],     //  3 68°N Alaska, Iceland, Scandinavia, Russia
    &[land(6, 7), land(9, 16), ice(18, 21), land(25, 25), land(28, 32), land(33, 49)],     //  4 61°N S Greenland, N Europe
    &[land(6, 7), land(9, 16), land(27, 28), land(29, 32), land(33, 48)],                  //  5 55°N UK, Europe
    &[land(8, 16), land(26, 30), land(31, 35), land(36, 47), land(49, 49)],                //  6 48°N Pacific NW, France, Hokkaido
    &[land(9, 16), land(27, 28), land(29, 34), land(35, 47), land(49, 50)],                //  7 42°N Spain, Middle East, Japan
    &[land(10, 16), land(27, 34), land(35, 37), land(39, 47), land(49, 49)],               //  8 35°N N Africa, India/China
    &[land(11, 13), land(15, 15), land(17, 17), land(27, 34), land(35, 37), land(39, 41), land(43, 47)], //  9 29°N Mexico, Florida, Sahara
    &[land(11, 13), land(15, 15), land(27, 34), land(35, 37), land(39, 42), land(43, 45)], // 10 22°N Caribbean, Arabia, SE Asia
    &[land(12, 13), land(16, 16), land(28, 30), land(34, 35), land(39, 41), land(46, 46)], // 11 16°N Central America, Horn, Philippines
    &[land(13, 13), land(15, 17), land(28, 31), land(33, 35), land(40, 40), land(44, 44)], // 12 10°N Panama, Venezuela, S India
    &[land(14, 15), land(17, 18), land(29, 33), land(40, 40), land(44, 45), land(47, 48)], // 13 3°N Colombia, Sri Lanka, Malaysia
    &[land(15, 19), land(30, 33), land(44, 44), land(47, 48), land(50, 51)],               // 14 3°S Amazon, Sumatra, Borneo
    &[land(16, 20), land(31, 34), land(46, 46), land(48, 48), land(50, 51)],               // 15 10°S Brazil, Java, PNG
    &[land(16, 21), land(33, 34), land(35, 35), land(48, 51)],                             // 16 16°S Madagascar, N Australia
    &[land(17, 20), land(32, 33), land(47, 52)],                                           // 17 22°S Namibia, Australia
    &[land(18, 19), land(32, 33), land(48, 52)],                                           // 18 29°S S Africa, Australia
    &[land(17, 18), land(33, 33), land(49, 51)],                                           // 19 35°S Argentina, E Australia
    &[land(17, 18), land(53, 53)],                                                         // 20 42°S Chile, New Zealand
    &[land(17, 17)],                                                                       // 21 48°S Patagonia
    &[land(17, 17)],                                                                       // 22 55°S Tierra del Fuego
    &[],                                                                                   // 23 61°S Southern Ocean
    &[ice(16, 17)],                                                                        // 24 68°S Antarctic Peninsula
    &[ice(9, 20), ice(29, 34), ice(39, 48)],                                               // 25 74°S Antarctica
    &[ice(7, 22), ice(27, 36), ice(38, 50)],                                               // 26 81°S
    &[ice(5, 23), ice(26, 52)],                                                            // 27 87°S
];

/// Built-in world texture, shared read-only by every renderer.
pub static EARTH: TextureMap = TextureMap::from_rows(&EARTH_ROWS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_is_all_ocean() {
        let row = build_row(&[]);
        assert!(row.iter().all(|&t| t == Terrain::Ocean));
    }

    #[test]
    fn ice_span_is_inclusive() {
        let row = build_row(&[RangeSpec::new(5, 7, Terrain::Ice)]);
        for (col, &terrain) in row.iter().enumerate() {
            if (5..=7).contains(&col) {
                assert_eq!(terrain, Terrain::Ice, "col {}", col);
            } else {
                assert_eq!(terrain, Terrain::Ocean, "col {}", col);
            }
        }
    }

    #[test]
    fn later_spans_overwrite_earlier_ones() {
        let row = build_row(&[land(0, 10), ice(4, 6)]);
        assert_eq!(row[3], Terrain::Land);
        assert_eq!(row[4], Terrain::Ice);
        assert_eq!(row[6], Terrain::Ice);
        assert_eq!(row[7], Terrain::Land);
        assert_eq!(row[11], Terrain::Ocean);
    }

    #[test]
    fn land_is_the_default_code() {
        assert_eq!(land(1, 2).terrain, Terrain::Land);
        assert_eq!(Terrain::Ocean.code(), 0);
        assert_eq!(Terrain::Land.code(), 1);
        assert_eq!(Terrain::Ice.code(), 2);
        assert_eq!(Terrain::default(), Terrain::Ocean);
    }

    #[test]
    #[should_panic]
    fn out_of_range_column_panics() {
        let end = std::hint::black_box(COLS);
        let _ = build_row(&[land(50, end)]);
    }

    #[test]
    fn earth_poles_are_ice_and_ocean() {
        assert!(EARTH
            .row(0)
            .iter()
            .all(|&t| t == Terrain::Ocean || t == Terrain::Ice));
        assert_eq!(EARTH.get(27, 30), Terrain::Ice);
        assert_eq!(EARTH.get(0, 0), Terrain::Ocean);
    }

    #[test]
    fn earth_southern_ocean_row_is_empty() {
        assert!(EARTH.row(23).iter().all(|&t| t == Terrain::Ocean));
    }

    #[test]
    fn earth_has_all_three_terrains() {
        let ocean = EARTH.count(Terrain::Ocean);
        let land = EARTH.count(Terrain::Land);
        let ice = EARTH.count(Terrain::Ice);
        assert_eq!(ocean + land + ice, ROWS * COLS);
        assert!(ocean > land, "ocean should dominate");
        assert!(land > 0 && ice > 0);
    }

    #[test]
    fn from_rows_keeps_row_order() {
        let mut rows: [&[RangeSpec]; ROWS] = [&[]; ROWS];
        let top = [ice(0, 0)];
        let bottom = [land(55, 55)];
        rows[0] = &top;
        rows[ROWS - 1] = &bottom;
        let map = TextureMap::from_rows(&rows);
        assert_eq!(map.get(0, 0), Terrain::Ice);
        assert_eq!(map.get(ROWS - 1, 55), Terrain::Land);
        assert_eq!(map.count(Terrain::Ocean), ROWS * COLS - 2);
    }
}
