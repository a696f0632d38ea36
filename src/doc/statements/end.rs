/*!
# `END`

## Purpose
Stops the program.

## Remarks
`END` at the end of a program is optional. Running off the last
statement stops the program too.

## Example
```text
PRINT "HELLO"
END
PRINT "THIS DOES NOT PRINT"
```
```text
HELLO
```

*/
