fn main() {
    std::process::exit(dta2csv::cli::run());
}
