use std::io::{self, Write};

pub const HELP_TEXT: &str = "\
Adds a watermark to png, jpg and jpeg images. Other image formats and files are ignored.

Available commands:
  -d, --directory   Add a directory to search for images to watermark
                    Example: -d C:/myDocuments C:/users/user/desktop/myPhotos
  -f, --file        Add one or more images to watermark
                    Example: -f C:/myDocuments/my_photo.jpg C:/users/user/desktop/myPhotos/anyPhoto.png
  -h, --help        Show the available commands and how to use them

Each image is written next to its source as <name>_marked.<ext>.
";

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "{}", HELP_TEXT)?;
    writeln!(out)
}

/// Report an argument that is neither a known flag nor part of a flag's path list.
pub fn write_unsupported<W: Write>(out: &mut W, token: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Command \"{}\" is not supported", token)?;
    write_help(out)
}
