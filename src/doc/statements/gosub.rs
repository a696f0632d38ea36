/*!
# `GOSUB <label>`

## Purpose
Runs a subroutine starting at the labeled statement.

## Remarks
`RETURN` goes back to the statement after the `GOSUB`. Subroutines may
call other subroutines. A label that is not defined anywhere is an
`UNDEFINED LABEL` error.

## Example
```text
GOSUB hello
PRINT "WORLD"
END
hello: PRINT "HELLO "
RETURN
```
```text
HELLO WORLD
```

*/
