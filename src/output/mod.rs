// Output formatting: terminal display of the similarity report.

pub mod terminal;
