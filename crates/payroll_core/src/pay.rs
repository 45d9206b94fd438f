use crate::attribution::{AttributionRecord, Ledger, WriterEntry};
use crate::money::Cents;
use crate::rates::{PayError, RateResolver};

/// An attributed article with its computed pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayRecord {
    pub article: AttributionRecord,
    pub pay: Cents,
}

impl WriterEntry<PayRecord> {
    /// Sum of the already-rounded per-article amounts.
    pub fn total_pay(&self) -> Cents {
        self.records.iter().map(|record| record.pay).sum()
    }
}

/// Prices every attributed article; the first unresolvable title aborts.
pub fn calculate_pays(
    ledger: Ledger<AttributionRecord>,
    resolver: &RateResolver<'_>,
) -> Result<Ledger<PayRecord>, PayError> {
    let mut priced = Ledger::new();
    for entry in ledger.into_entries() {
        for article in entry.records {
            let rate = resolver.resolve(&entry.writer, &article.job_title)?;
            let pay = rate.pay_for(article.characters);
            priced.push(&entry.writer, PayRecord { article, pay });
        }
    }
    Ok(priced)
}
