pub mod postings_writer;
