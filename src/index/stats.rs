use crate::index::CorpusStore;

/// Display corpus and index statistics
pub fn show_stats(store: &CorpusStore) {
    let stats = store.stats();

    println!("Corpus Statistics");
    println!("=================");
    println!();
    match &stats.path {
        Some(path) => println!("Corpus path:      {}", path.display()),
        None => println!("Corpus path:      (in memory)"),
    }
    println!("Corpus size:      {}", format_size(stats.bytes as u64));
    println!("Lines:            {}", stats.lines);
    println!();
    println!("Suffix count:     {}", stats.suffix_count);
    println!(
        "Case folding:     {}",
        if stats.case_insensitive { "lowercase" } else { "none" }
    );
    println!("Build time:       {:.1} ms", stats.build_ms);
    println!("Index memory:     {}", format_size(stats.memory_bytes as u64));
}

/// Format byte size to human readable
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.50 MB");
    }
}
