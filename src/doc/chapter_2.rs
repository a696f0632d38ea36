/*!
# Statements

A program is a list of statements separated by line breaks. Any
statement may start with a label, a name followed by a colon, which
`GOSUB` and `IF` refer to.
*/

#[path = "statements/data.rs"]
#[allow(non_snake_case)]
pub mod DATA;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/gosub.rs"]
#[allow(non_snake_case)]
pub mod GOSUB;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/next.rs"]
#[allow(non_snake_case)]
pub mod NEXT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;
