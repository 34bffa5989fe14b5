//! Interactive demo: four bookmarks, vim-style movement on top of the arrow
//! keys, `r` to remove the selected bookmark, `q` to quit.
//!
//! Run with `cargo run --example pager`.

use list_pager::prelude::*;
use list_pager::key::{short_help_line, KeyMap};

fn main() -> list_pager::Result<()> {
    let config = PagerConfig::default().with_pagination(PaginatorType::Dots);
    let mut list: Pager<String, TerminalSurface<std::io::Stdout>, TerminalInput> = Pager::new(
        TerminalSurface::stdout(config.width, config.height),
        TerminalInput::new(),
        config,
    )?;

    let help = format!(
        "{} • j/k move • r remove • q quit",
        short_help_line(&list.keymap().short_help())
    );
    list.add_header("help".to_string(), help)?;
    list.add_header("status".to_string(), "")?;

    for (url, label) in [
        ("http://google.com", "Google"),
        ("http://yahoo.com", "Yahoo"),
        ("http://cloudup.com", "Cloudup"),
        ("http://github.com", "Github"),
    ] {
        list.add_item(url.to_string(), label)?;
    }

    let status = "status".to_string();
    list.on(move |list, event| {
        let outcome = match event {
            Event::Keypress { key, .. } if !key.ctrl() => match key.name().as_str() {
                "r" => list.remove_item(None).map(|_| ()),
                "j" => list.down(),
                "k" => list.up(),
                "q" => list.stop(),
                _ => Ok(()),
            },
            Event::Remove(id) => list.update_header(&status, format!("removed {id}")),
            Event::Empty => list.update_header(&status, "nothing left"),
            _ => Ok(()),
        };
        if let Err(err) = outcome {
            tracing::warn!(%err, "demo action failed");
        }
    });

    list.run()
}
