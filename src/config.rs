//! Command-line parsing for the app.

use clap::{value_t, App, AppSettings, Arg, ArgMatches};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub current_page: i64,
    pub total_pages: i64,
    pub boundaries: i64,
    pub around: i64,
}

fn app() -> App<'static, 'static> {
    App::new("pagetext")
        .version("0.1")
        .author("Gaëtan Cassiers <gaetan.cassiers@uclouvain.be>")
        .about("Compact text pagination: boundary pages, pages around the current one, ellipses in between.")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name("current")
                .value_name("CURRENT")
                .help("Current page number")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("total")
                .value_name("TOTAL")
                .help("Total number of pages")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("boundaries")
                .short("b")
                .long("boundaries")
                .value_name("N")
                .help("Number of pages always shown at the beginning and at the end")
                .takes_value(true)
                .default_value("1"),
        )
        .arg(
            Arg::with_name("around")
                .short("a")
                .long("around")
                .value_name("N")
                .help("Number of pages shown before and after the current page")
                .takes_value(true)
                .default_value("2"),
        )
}

fn from_matches(matches: &ArgMatches) -> Result<Config, clap::Error> {
    Ok(Config {
        current_page: value_t!(matches, "current", i64)?,
        total_pages: value_t!(matches, "total", i64)?,
        boundaries: value_t!(matches, "boundaries", i64)?,
        around: value_t!(matches, "around", i64)?,
    })
}

pub fn parse_cmd_line() -> Config {
    let matches = app().get_matches();
    from_matches(&matches).unwrap_or_else(|e| e.exit())
}
