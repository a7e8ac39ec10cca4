use std::fmt;

/// Counters of a translation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub translated: usize,
    pub page_faults: usize,
    pub tlb_hits: usize,
    pub page_table_hits: usize,
}

impl Statistics {
    pub fn page_fault_rate(&self) -> f64 {
        rate(self.page_faults, self.translated)
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        rate(self.tlb_hits, self.translated)
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Translated Addresses = {}", self.translated)?;
        writeln!(f, "Page Faults = {}", self.page_faults)?;
        writeln!(f, "Page Fault Rate = {:.3}", self.page_fault_rate())?;
        writeln!(f, "TLB Hits = {}", self.tlb_hits)?;
        write!(f, "TLB Hit Rate = {:.3}", self.tlb_hit_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::Statistics;

    #[test]
    fn rates() {
        let stats = Statistics {
            translated: 1000,
            page_faults: 538,
            tlb_hits: 54,
            page_table_hits: 408,
        };
        assert!((stats.page_fault_rate() - 0.538).abs() < 1e-9);
        assert!((stats.tlb_hit_rate() - 0.054).abs() < 1e-9);
    }

    #[test]
    fn empty_run_has_zero_rates() {
        let stats = Statistics::default();
        assert_eq!(stats.page_fault_rate(), 0.0);
        assert_eq!(stats.tlb_hit_rate(), 0.0);
    }

    #[test]
    fn summary_format() {
        let stats = Statistics {
            translated: 3,
            page_faults: 2,
            tlb_hits: 1,
            page_table_hits: 0,
        };
        assert_eq!(
            stats.to_string(),
            "Number of Translated Addresses = 3\n\
             Page Faults = 2\n\
             Page Fault Rate = 0.667\n\
             TLB Hits = 1\n\
             TLB Hit Rate = 0.333"
        );
    }
}
