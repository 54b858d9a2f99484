use std::io::{self, Write};

const BIKES: [&str; 3] = [
    r" o__         __o        ,__o        __o           __o",
    r" ,>/_       -\<,      _-\_<,       _`\<,_       _ \<_",
    r"(*)`(*).....O/ O.....(*)/'(*).....(*)/ (*).....(_)/(_)",
];

fn bikes<W: Write>(out: &mut W) -> io::Result<()> {
    for line in BIKES {
        writeln!(out, "{line}")?;
    }
    writeln!(out)
}

pub fn welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;
    writeln!(out)?;
    bikes(out)
}

pub fn goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Bye! See you next time.")?;
    writeln!(out)?;
    bikes(out)
}
