/*!
# Errors

Every error stops the program. Errors print as the message below,
then ` IN ` and the line number when one is known, then the columns
for errors found while parsing, then details after a semicolon.

```text
?UNDEFINED LABEL IN 4; nowhere
?SYNTAX ERROR IN 1 (2..3); EXPECTED =
```

| Code | Message | Cause |
|---|---|---|
| 1 | `NEXT WITHOUT FOR` | `NEXT` with no loop running, or naming a variable no loop uses |
| 2 | `SYNTAX ERROR` | A statement that cannot be parsed |
| 3 | `RETURN WITHOUT GOSUB` | `RETURN` with no `GOSUB` waiting |
| 4 | `OUT OF DATA` | `READ` of a different number of variables than values left |
| 5 | `ILLEGAL FUNCTION CALL` | A function argument out of range |
| 6 | `OVERFLOW` | Integer math past 32 bits |
| 7 | `OUT OF MEMORY` | Too many variables, nested `GOSUB`s, `FOR`s, or `IF`s |
| 8 | `UNDEFINED LABEL` | `GOSUB` or `IF` to a label that does not exist |
| 11 | `DIVISION BY ZERO` | Integer division by zero |
| 13 | `TYPE MISMATCH` | Mixing integers, floats and strings |
| 24 | `UNDEFINED VARIABLE` | Reading a variable before assigning it |
| 25 | `BAD INPUT` | `INPUT` that does not parse, or no input left |
| 26 | `FOR WITHOUT NEXT` | A finished `FOR` with no `NEXT` after it |
| 28 | `BREAK` | CTRL-C |
| 51 | `INTERNAL ERROR` | A bug in the interpreter |
| 57 | `DEVICE I/O ERROR` | The program file or the terminal failed |
| 73 | `ADVANCED FEATURE` | Running a `WHILE`, or an `IF` whose label is on a `FOR` or `NEXT` |

*/
