//! Plain-text report of one search.

use std::fmt::{self, Write};

use keypaper_ingestion::models::{SearchOutcome, SearchParams};
use keypaper_ingestion::normalise::doi_url;
use keypaper_kg::CentralityResult;
use keypaper_ranker::top::{ellipsize, group_thousands};
use keypaper_ranker::{JournalCount, MustRead};

const AUTHORS_PREVIEW: usize = 150;
const ABSTRACT_PREVIEW: usize = 600;

pub struct Report<'a> {
    pub params: &'a SearchParams,
    pub outcome: &'a SearchOutcome,
    pub must_read: &'a [MustRead<'a>],
    pub centrality: &'a CentralityResult,
    pub journals: &'a [JournalCount],
}

impl Report<'_> {
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        self.header(out)?;
        self.papers(out)?;
        self.key_players(out)?;
        self.journals(out)
    }

    fn header(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "Key-Paper Helper")?;
        writeln!(
            out,
            "'{}' results ({}-{}) | {} total",
            self.params.query,
            self.params.year_from,
            self.params.year_to,
            group_thousands(self.outcome.total_count),
        )?;
        writeln!(out)
    }

    fn papers(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "== Must-read top {} ==", self.must_read.len())?;
        for m in self.must_read {
            writeln!(out, "{:>2}. [{}] {}", m.rank, m.citations_label(), m.paper_label())?;
        }
        writeln!(out)?;

        for m in self.must_read {
            let r = m.record;
            writeln!(out, "{}. {} ({})", m.rank, r.title, m.citations_label())?;
            if let Some(url) = doi_url(&r.doi) {
                writeln!(out, "   link:    {url}")?;
            }
            match r.year {
                Some(y) => writeln!(out, "   year:    {y}")?,
                None => writeln!(out, "   year:    n.d.")?,
            }
            let journal = if r.journal.is_empty() { "N/A" } else { r.journal.as_str() };
            writeln!(out, "   journal: {journal}")?;
            writeln!(out, "   type:    {}", r.paper_type)?;
            writeln!(out, "   authors: {}", ellipsize(&r.authors_display(), AUTHORS_PREVIEW))?;
            if !r.abstract_text.is_empty() {
                writeln!(out, "   abstract: {}", ellipsize(&r.abstract_text, ABSTRACT_PREVIEW))?;
            }
        }
        writeln!(out)
    }

    fn key_players(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "== Key players ==")?;
        if self.centrality.is_empty() {
            writeln!(out, "Not enough co-authorship data to analyse.")?;
            return writeln!(out);
        }

        writeln!(out, "Degree centrality (most collaborators):")?;
        for (i, (name, score)) in self.centrality.degree.iter().enumerate() {
            writeln!(out, "  {}. {name} {score:.3}", i + 1)?;
        }
        writeln!(out, "Betweenness centrality (bridges between groups):")?;
        for (i, (name, score)) in self.centrality.betweenness.iter().enumerate() {
            writeln!(out, "  {}. {name} {score:.3}", i + 1)?;
        }
        writeln!(out)
    }

    fn journals(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "== Journals ==")?;
        if self.journals.is_empty() {
            return writeln!(out, "No journal information.");
        }
        for (i, j) in self.journals.iter().enumerate() {
            writeln!(out, "  {:>2}. {} ({} papers)", i + 1, j.journal, j.papers)?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
