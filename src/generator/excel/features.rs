use bitflags::bitflags;

bitflags! {
    /// Optional parts of the template layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TemplateFeatures: u8 {
        /// Write formulas into every month column of the summary sheets,
        /// plus the annual total on the profit-and-loss sheet.
        const ALL_MONTHS = 0b0001;
        /// Fill the dashboard's top-vehicles table with ranking formulas.
        const VEHICLE_RANKING = 0b0010;
        /// Extend dropdowns and row formulas over blank entry rows.
        const ENTRY_ROWS = 0b0100;
        /// Freeze panes below the header row of input sheets.
        const FREEZE_HEADERS = 0b1000;

        /// Complete layout (default).
        const ALL = Self::ALL_MONTHS.bits()
                  | Self::VEHICLE_RANKING.bits()
                  | Self::ENTRY_ROWS.bits()
                  | Self::FREEZE_HEADERS.bits();

        /// January-only formulas and a header-only ranking table, exactly as
        /// the template was first laid out.
        const SOURCE_LAYOUT = 0b0000;
    }
}
