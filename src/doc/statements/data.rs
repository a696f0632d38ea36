/*!
# `DATA <literal>[,<literal>...]`

## Purpose
Defines the constants that `READ` takes values from.

## Remarks
Only numbers and quoted strings are allowed. The values are collected
when the program is linked, so `DATA` does nothing when it runs and may
appear anywhere. Only the first `DATA` in a program counts; any later
ones are ignored with a warning.

## Example
```text
READ name$, count
PRINT name$, count
DATA "NUGGET", 3
```
```text
NUGGET
3
```

*/
