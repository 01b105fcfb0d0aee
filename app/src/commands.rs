use common::{
    models::{MarketOrder, PerPage, VsCurrency},
    Error, Result,
};

/// One user interaction with the view, parsed from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PreviousPage,
    GotoPage(u32),
    SetCurrency(VsCurrency),
    SetOrder(MarketOrder),
    SetPerPage(PerPage),
    Refresh,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  n, next                          go to the next page
  p, prev                          go to the previous page
  g, page <n>                      jump to page n
  c, currency <usd|eur>            switch quote currency
  o, order <market_cap_desc|market_cap_asc>
                                   switch sort order (aliases: desc, asc)
  s, per-page <5|10|20|50|100>     rows per page
  r, refresh                       re-fetch the current page
  h, help                          show this help
  q, quit                          exit";

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut parts = line.split_whitespace();
        let word = parts
            .next()
            .ok_or_else(|| Error::Parse("Empty command".to_string()))?;
        let arg = parts.next();

        if parts.next().is_some() {
            return Err(Error::Parse(format!(
                "Too many arguments for command: {}",
                line.trim()
            )));
        }

        let needs_arg = |name: &str| {
            arg.ok_or_else(|| Error::Parse(format!("Command '{}' needs an argument", name)))
        };

        let no_arg = |cmd: Command| match arg {
            Some(extra) => Err(Error::Parse(format!("Unexpected argument: {}", extra))),
            None => Ok(cmd),
        };

        match word {
            "n" | "next" => no_arg(Command::NextPage),
            "p" | "prev" | "previous" => no_arg(Command::PreviousPage),
            "g" | "page" => {
                let raw = needs_arg("page")?;
                let page = raw
                    .parse::<u32>()
                    .map_err(|_| Error::Parse(format!("Invalid page number: {}", raw)))?;
                Ok(Command::GotoPage(page))
            }
            "c" | "currency" => Ok(Command::SetCurrency(needs_arg("currency")?.parse()?)),
            "o" | "order" => Ok(Command::SetOrder(needs_arg("order")?.parse()?)),
            "s" | "per-page" | "size" => Ok(Command::SetPerPage(needs_arg("per-page")?.parse()?)),
            "r" | "refresh" => no_arg(Command::Refresh),
            "h" | "help" | "?" => no_arg(Command::Help),
            "q" | "quit" | "exit" => no_arg(Command::Quit),
            unknown => Err(Error::Parse(format!(
                "Unknown command: {}. Type 'help' for the command list",
                unknown
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_stepping() {
        assert_eq!(Command::parse("n").unwrap(), Command::NextPage);
        assert_eq!(Command::parse("next").unwrap(), Command::NextPage);
        assert_eq!(Command::parse("p").unwrap(), Command::PreviousPage);
        assert_eq!(Command::parse("  prev  ").unwrap(), Command::PreviousPage);
    }

    #[test]
    fn parses_page_jump() {
        assert_eq!(Command::parse("page 42").unwrap(), Command::GotoPage(42));
        assert_eq!(Command::parse("g 1").unwrap(), Command::GotoPage(1));
        assert!(Command::parse("page").is_err());
        assert!(Command::parse("page forty-two").is_err());
    }

    #[test]
    fn parses_selectors() {
        assert_eq!(
            Command::parse("currency eur").unwrap(),
            Command::SetCurrency(VsCurrency::Eur)
        );
        assert_eq!(
            Command::parse("o asc").unwrap(),
            Command::SetOrder(MarketOrder::MarketCapAsc)
        );
        assert_eq!(
            Command::parse("per-page 100").unwrap(),
            Command::SetPerPage(PerPage::OneHundred)
        );
        assert!(Command::parse("currency gbp").is_err());
        assert!(Command::parse("per-page 15").is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("bogus").is_err());
        assert!(Command::parse("next 2").is_err());
        assert!(Command::parse("page 1 2").is_err());
    }
}
